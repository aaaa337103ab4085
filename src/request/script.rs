//! The `run_nmsclient.sh` batch script.

use super::RequestDocument;

pub const DEFAULT_SCRIPT_NAME: &str = "run_nmsclient.sh";

pub const HEADER: &str = "#!/bin/bash\n\n";

const CLIENT: &str = "nms_client.sh";

/// One client invocation for a request document, newline terminated.
pub fn invocation(doc: &RequestDocument) -> String {
    format!("{} {} -f {}\n", CLIENT, doc.file_name(), doc.output_name())
}

// -- Tests -------------------------------------------------------------------
