//! API command implementation.

use basecat_core::{ApiService, BaseConfig, DataKind};

use crate::output::{self, Column};

const SERVICE_COLUMNS: [Column; 2] = [
    Column { title: "Service", width: 12 },
    Column { title: "Base URL", width: 0 },
];

const INTERVAL_COLUMNS: [Column; 2] = [
    Column { title: "Data", width: 14 },
    Column { title: "Refresh", width: 0 },
];

/// Run the api command.
pub fn run(config: &BaseConfig) -> i32 {
    let api = &config.api;

    output::header("API Endpoints");
    output::table_header(&SERVICE_COLUMNS);
    for service in ApiService::ALL {
        output::table_row(&SERVICE_COLUMNS, service.as_str(), &[&api.endpoint(service)]);
    }

    output::header("Refresh Intervals");
    output::table_header(&INTERVAL_COLUMNS);
    for kind in DataKind::ALL {
        let interval = format!("{} ms", api.refresh_interval(kind).as_millis());
        output::table_row(&INTERVAL_COLUMNS, kind.as_str(), &[&interval]);
    }

    println!();
    output::hint("Append service paths to these base URLs; basecat makes no requests.");

    0
}
