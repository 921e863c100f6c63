//! Run-script writer.
//!
//! Renders `run_<module>.sh`: a fixed-shape robot invocation parameterized
//! only by the module name. The tag filters are literal, not derived from
//! the scan.

use crate::module::ModuleName;

/// Render the invocation script.
#[must_use]
pub fn render(module: &ModuleName) -> String {
    format!(
        r"#!/bin/bash
#==============================================================================================================
# Robot Framework test execution script
#==============================================================================================================
set -ex
robot -L trace -d rfoutput --exclude not-readyOrnot-run \
        --include priority-P0 \
        testcase/{module}/
"
    )
}
