#![no_std]

pub mod proxy_controller;
pub mod proxy_price_feed;
