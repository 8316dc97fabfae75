pub mod config;

pub mod domain {
    pub mod error;
    pub mod repository;
    pub mod validation;

    pub mod model {
        pub mod book;
        pub mod catalog;
        pub mod id;
    }
}

pub mod application {
    pub mod error;
    pub mod service;
}

pub mod infra {
    pub mod json_store;
}

pub mod interface {
    pub mod api;
    pub mod html;
    pub mod pages;
    pub mod server;
}
