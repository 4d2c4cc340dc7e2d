use fractic_server_error::define_client_error;

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidJson, "Invalid JSON snapshot.");
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidDate, "Invalid date: '{date}'.", { date: &str });
define_client_error!(InvalidAmount, "Invalid monetary amount: '{value}'.", { value: &str });
define_client_error!(
    UnknownPaymentMethod,
    "Unknown payment method: '{value}'.",
    { value: &str }
);
define_client_error!(
    UnknownPaymentStatus,
    "Unknown payment status: '{value}'.",
    { value: &str }
);
define_client_error!(
    UnknownTransactionKind,
    "Unknown transaction kind: '{value}'.",
    { value: &str }
);
define_client_error!(
    UnknownCurrency,
    "Unknown or unsupported currency code: '{code}'.",
    { code: &str }
);

// Reporting-related.
define_client_error!(ClientNotFound, "No client with id '{id}'.", { id: &str });
define_client_error!(
    UnreplacedPlaceholdersRemain,
    "Unreplaced placeholders remain in statement template: {keys:?}.",
    { keys: &Vec<String> }
);
