//! Application layer: use cases

pub mod config;
pub mod delete_menu_item;
pub mod get_menu_item;
pub mod list_menu_items;
pub mod update_menu_item;

pub use delete_menu_item::{DeleteMenuItemOutput, DeleteMenuItemUseCase};
pub use get_menu_item::GetMenuItemUseCase;
pub use list_menu_items::ListMenuItemsUseCase;
pub use update_menu_item::UpdateMenuItemUseCase;
