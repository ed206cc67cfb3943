// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod config_datasource;
        pub(crate) mod store_document_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod client_model;
        pub(crate) mod iso_datetime_model;
        pub(crate) mod ledger_config_model;
        pub(crate) mod payment_model;
        pub(crate) mod project_model;
        pub(crate) mod store_document_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod record_store_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod client;
        pub(crate) mod client_summary;
        pub(crate) mod exported_workbook;
        pub(crate) mod ledger_config;
        pub(crate) mod payment;
        pub(crate) mod project;
        pub(crate) mod record_id;
    }
    pub(crate) mod logic {
        pub(crate) mod record_id_gen;
        pub(crate) mod summary_logic;
        pub(crate) mod validate;
    }
    pub(crate) mod repositories {
        pub(crate) mod record_store;
    }
    pub(crate) mod usecases {
        pub(crate) mod bookkeeping_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod client_workbook;
    pub(crate) mod daily_workbook;
    pub(crate) mod filename;
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
        pub use crate::domain::entities::client::*;
        pub use crate::domain::entities::client_summary::*;
        pub use crate::domain::entities::exported_workbook::*;
        pub use crate::domain::entities::ledger_config::*;
        pub use crate::domain::entities::payment::*;
        pub use crate::domain::entities::project::*;
        pub use crate::domain::entities::record_id::*;
    }
}
