pub mod shared {
    pub mod core {
        pub mod instant;
        pub mod pagination;
    }
    pub mod infrastructure {
        pub mod cache;
    }
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod event;
            pub mod filters;
            pub mod status;
            pub mod timeline;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod fallback;
                pub mod repository;
                pub mod repository_in_memory;
                pub mod row;
            }
        }
        pub mod store;
        pub mod use_cases {
            pub mod errors;
            pub mod submit_event {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod revise_event {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod handler;
                pub mod query;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_event {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
