//! Test-suite document writer.
//!
//! Renders the `01_Compilation_Output_Check.robot` document: a settings
//! header referencing the stub library, one variable binding for the
//! scanned root, and one ordered test case per case record. File-check
//! cases whose code appears in the rule table get an extra `arrest_result`
//! step; no other code ever does.

use super::{CASE_TIMEOUT, FORCE_TAGS};
use crate::index::{CaseKind, CaseRecord};
use crate::module::ModuleName;
use crate::rules::{RuleTable, var_name};
use std::path::Path;

/// Render the suite document.
#[must_use]
pub fn render(
    module: &ModuleName,
    root: &Path,
    records: &[CaseRecord],
    rules: &RuleTable,
) -> String {
    let upper = module.upper();
    let capitalized = module.capitalized();
    let mut out = String::new();

    out.push_str("*** Settings ***\n");
    out.push_str(&format!("Force Tags        {FORCE_TAGS}\n"));
    out.push_str(&format!(
        "Documentation     Basic test for {}\n",
        root.display()
    ));
    out.push_str(&format!(
        "Library           ../../libraries/{module}/Test{capitalized}.py\n"
    ));

    out.push_str("\n*** Variables ***\n");
    out.push_str(&format!("${{AD_{upper}_DIR}}    {}\n", root.display()));

    out.push_str("\n*** Test Cases ***\n");
    for record in records {
        match record.kind {
            CaseKind::PathCheck => render_path_case(&mut out, &upper, &capitalized, record),
            CaseKind::FileCheck => render_file_case(&mut out, &upper, record, rules),
        }
        out.push_str("\n\n");
    }

    out
}

fn render_path_case(out: &mut String, upper: &str, capitalized: &str, record: &CaseRecord) {
    out.push_str(&format!(
        "AD_{upper}_OUTPUT_CHECK_{} Compilation_Path_Check\n",
        record.code
    ));
    out.push_str(&format!(
        "    [Documentation]    {capitalized} Compile output path detection\n"
    ));
    out.push_str(&format!("    [Timeout]          {CASE_TIMEOUT}\n"));
    out.push_str("    [Setup]            Setup\n");
    out.push_str(&format!(
        "    ${{Returnvar}} =     Compilation Path Check    {}\n",
        record.dir.display()
    ));
    out.push_str("    SHOULD BE TRUE     ${Returnvar}\n");
    out.push_str("    [Teardown]         Teardown\n");
}

fn render_file_case(out: &mut String, upper: &str, record: &CaseRecord, rules: &RuleTable) {
    let file = record.file.as_deref().unwrap_or_default();

    out.push_str(&format!(
        "AD_{upper}_OUTPUT_CHECK_{} Compilation_File_Check\n",
        record.code
    ));
    out.push_str(&format!(
        "    [Documentation]    {} Compile output file detection\n",
        record.dir.display()
    ));
    out.push_str(&format!("    [Timeout]          {CASE_TIMEOUT}\n"));
    out.push_str("    [Setup]            Setup\n");
    out.push_str(&format!(
        "    ${{Filepath}} =    CATENATE    {}\n",
        record.dir.display()
    ));
    out.push_str(&format!(
        "    ${{Returnvar}} =     Compilation File Check    ${{Filepath}}    {file}\n"
    ));
    out.push_str("    SHOULD BE TRUE     ${Returnvar}\n");
    out.push_str(&format!(
        "    ${{data}} =     read_file    ${{Filepath}}    {file}\n"
    ));

    if let Some((position, rule)) = rules.lookup(record.code.as_str()) {
        let var = var_name(position);
        out.push_str(&format!(
            "    ${{{var}}}=         arrest_result    ${{data}}     {}    {}\n",
            rule.path, rule.expected
        ));
        out.push_str(&format!("    SHOULD BE TRUE     ${{{var}}}\n"));
    }

    out.push_str("    [Teardown]         Teardown\n");
}
