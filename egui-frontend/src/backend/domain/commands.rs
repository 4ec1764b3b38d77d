//! Domain-level command and query types.
//!
//! These structs are the inputs the UI layer hands to domain services. They
//! keep screen code free of loose positional arguments and give each
//! operation a single, nameable shape.

pub mod auth {
    /// Input for a login attempt.
    #[derive(Debug, Clone)]
    pub struct LoginCommand {
        pub email: String,
        pub password: String,
    }
}

pub mod herd {
    use shared::Gender;

    /// Filter for the cow registry screen.
    #[derive(Debug, Clone, Default)]
    pub struct CowFilterQuery {
        /// `None` means "All".
        pub gender: Option<Gender>,
        /// Case-insensitive substring match over name, tag id and breed.
        pub search: String,
    }
}

pub mod milk {
    use chrono::NaiveDate;
    use std::collections::HashMap;

    use crate::backend::domain::models::milk_record::MilkRecord;

    /// Input for saving one day's milk entry form.
    ///
    /// `entries` maps cow id to the raw text typed into the amount field;
    /// validation happens inside the service.
    #[derive(Debug, Clone)]
    pub struct SaveDailyRecordsCommand {
        pub date: NaiveDate,
        pub entries: HashMap<String, String>,
    }

    /// Result of saving a day's entries.
    #[derive(Debug, Clone)]
    pub struct SaveDailyRecordsResult {
        /// The full replacement record list (the caller owns the old one).
        pub records: Vec<MilkRecord>,
        /// How many entries passed validation and were written for the day.
        pub saved_count: usize,
        pub success_message: String,
    }
}
