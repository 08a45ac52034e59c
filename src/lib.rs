pub mod shared {
    pub mod core {
        pub mod clock;
        pub mod config;
        pub mod duration;
    }
}

pub mod modules {
    pub mod worklog_sync {
        pub mod core {
            pub mod errors;
            pub mod identity;
            pub mod policy;
            pub mod ports;
            pub mod remote_worklog;
            pub mod sync_result;
            pub mod ticket_key;
            pub mod timestamps;
            pub mod tracked_interval;
        }
        pub mod use_cases {
            pub mod extract_intervals {
                pub mod extract;
                pub mod handler;
            }
            pub mod annotate_note {
                pub mod handler;
            }
            pub mod fetch_worklogs {
                pub mod date_floor;
                pub mod handler;
            }
            pub mod detect_duplicate {
                pub mod detect;
            }
            pub mod sync_interval {
                pub mod comment;
                pub mod handler;
            }
            pub mod sync_batch {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_intervals {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod summarize_tickets {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod in_memory_interval_export;
                pub mod in_memory_switch_log;
                pub mod in_memory_worklog_remote;
                pub mod jira_rest;
                pub mod timewarrior_cli;
            }
        }
    }
}

pub mod shell;
