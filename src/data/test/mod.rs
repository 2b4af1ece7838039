mod blacklist;
mod lock;
mod server_config;
mod trigger_keyword;
