pub mod shared {
    pub mod core {
        pub mod clock;
        pub mod duration;
    }
    pub mod infrastructure {
        pub mod capture_source;
        pub mod persistent_store;
    }
}

pub mod modules {
    pub mod hall_pass {
        pub mod core {
            pub mod events;
            pub mod evolve;
            pub mod ledger;
            pub mod roster;
            pub mod session;
            pub mod settings;
            pub mod state;
        }
        pub mod application {
            pub mod controller;
            pub mod errors;
            pub mod scan;
        }
        pub mod use_cases {
            pub mod start_pass {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod end_pass {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod view_status {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod view;
            }
            pub mod manage_ledger {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manage_roster {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_settings {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod scan {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql_error;
                pub mod http_error;
            }
            pub mod outbound {
                pub mod snapshots;
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures;

    pub mod e2e {
        pub mod pass_lifecycle_tests;
    }
}
