//! Library stub writer.
//!
//! Renders the `Test<Module>.py` companion document. The class name, the
//! four method names, their argument order, and the fail-soft behavior
//! (every failure resolves to `False`) are the contract the external engine
//! resolves by relative path; none of it may drift. The header carries no
//! timestamp so reruns stay byte-identical.

use crate::module::ModuleName;

/// Render the stub library document.
#[must_use]
pub fn render(module: &ModuleName) -> String {
    let class = module.capitalized();
    format!(
        r#"#!/usr/bin/python
# -*- coding:utf-8 -*-
# Generated library stub for the {module} compilation output suite.
# Every operation is fail-soft: all failures resolve to False at the
# keyword boundary.

import os
import os.path

import json
import jsonpath
import yaml


class Test{class}(object):
    def __init__(self):
        print("[INFO] test library loaded")

    def setup(self):
        print("[INFO] case setup")

    def teardown(self):
        print("[INFO] case teardown")

    def compilation_path_check(self, output_path):
        try:
            result = os.path.exists(output_path)
        except Exception:
            result = False
        return result

    def compilation_file_check(self, output_path, output_filename):
        try:
            filepath = output_path + "/" + output_filename
            result = os.path.isfile(filepath)
        except Exception:
            result = False
        return result

    def read_file(self, output_path, output_filename):
        filepath = output_path + "/" + output_filename
        if not os.path.exists(filepath):
            return False

        if filepath.endswith('.yaml'):
            with open(filepath, 'r', encoding='utf-8') as f:
                return yaml.safe_load(f)
        if filepath.endswith('.json') or filepath.endswith('.meta'):
            with open(filepath, 'r') as f:
                return json.load(f)
        return False

    def arrest_result(self, data, act, ect):
        try:
            matches = jsonpath.jsonpath(data, act)
            if not matches:
                return False
            return str(matches[0]) == ect
        except Exception:
            return False


if __name__ == "__main__":
    Test{class}()
"#
    )
}
