pub mod accessory_bar;
pub mod menu;
pub mod theme;
