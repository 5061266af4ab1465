mod config;
mod presenter;
