//! UI Components
//!
//! Presentational Leptos components. None of them writes the item store;
//! changes go back to the root through callbacks.

mod logo;
mod add_item_form;
mod packing_list;
mod packing_row;
mod category_filter_select;
mod stats_footer;

pub use logo::Logo;
pub use add_item_form::AddItemForm;
pub use packing_list::PackingList;
pub use packing_row::PackingRow;
pub use category_filter_select::CategoryFilterSelect;
pub use stats_footer::StatsFooter;
