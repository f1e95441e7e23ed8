pub mod custom_tab;
