pub mod badges;
pub mod dispatch;
pub mod menu;
