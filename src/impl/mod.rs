// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod sheets_csv_datasource;
        pub(crate) mod snapshot_json_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod iso_date_model;
        pub(crate) mod money_model;
        pub(crate) mod payment_models;
        pub(crate) mod related_ref_model;
        pub(crate) mod snapshot_models;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod allocation;
        pub(crate) mod client;
        pub(crate) mod event_log;
        pub(crate) mod expense;
        pub(crate) mod ledger;
        pub(crate) mod money;
        pub(crate) mod order;
        pub(crate) mod settlement;
        pub(crate) mod statement;
        pub(crate) mod transaction;
    }
    pub(crate) mod logic {
        pub(crate) mod balance_calculator;
        pub(crate) mod debt_aggregator;
        pub(crate) mod fifo_allocator;
        pub(crate) mod history_builder;
        pub(crate) mod matcher;
        mod utils;
        pub(crate) use utils::*;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod report_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod statement_printer;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::allocation::*;
        pub use crate::domain::entities::client::*;
        pub use crate::domain::entities::event_log::*;
        pub use crate::domain::entities::expense::*;
        pub use crate::domain::entities::ledger::*;
        pub use crate::domain::entities::money::*;
        pub use crate::domain::entities::order::*;
        pub use crate::domain::entities::settlement::*;
        pub use crate::domain::entities::statement::*;
        pub use crate::domain::entities::transaction::*;
    }
}
