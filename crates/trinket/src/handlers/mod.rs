pub mod flash;
pub mod health;
pub mod items;
pub mod pages;
