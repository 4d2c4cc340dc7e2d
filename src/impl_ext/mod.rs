// Crate-internal.
// ---

pub(crate) mod custom_statements {
    pub(crate) mod cash_position_statement;
    pub(crate) mod utils;
}

// Public exports.
// ---

pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod custom_statements {
        pub use crate::impl_ext::custom_statements::cash_position_statement::*;
    }
}
