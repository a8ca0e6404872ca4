pub mod character_creation;
pub mod character_select;
pub mod combat_scene;
pub mod game_screen;
pub mod shop_scene;
