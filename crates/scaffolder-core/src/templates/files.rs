//! Hardcoded file bodies

/// `tailwind.config.js`, scanning the entry HTML and every source file
pub const TAILWIND_CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
module.exports = {
  content: ["./index.html", "./src/**/*.{js,ts,jsx,tsx}"],
  theme: {
    extend: {},
  },
  plugins: [],
};
"#;

/// `src/index.css`
pub const INDEX_CSS: &str = "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n";

/// `vite.config.ts` with the React plugin and the `@` alias
pub const VITE_CONFIG: &str = r#"import { defineConfig } from 'vite'
import path from "path"
import react from '@vitejs/plugin-react-swc'

export default defineConfig({
  plugins: [react()],
  resolve: {
    alias: {
      "@": path.resolve(__dirname, "./src"),
    },
  },
})
"#;

/// `vite.config.ts` for dashboard projects; supersedes [`VITE_CONFIG`]
pub const VITE_CONFIG_VARIANT: &str = r#"import { defineConfig } from 'vite'
import path from "path"
import react from '@vitejs/plugin-react-swc'
import { convertToSankhyaBI } from "@insulino/vite-plugin-2sankhyabi"

export default defineConfig({
  plugins: [react(), { ...convertToSankhyaBI(), apply: "build" }],
  resolve: {
    alias: {
      "@": path.resolve(__dirname, "./src"),
    },
  },
})
"#;

/// `src/lib/query.ts`, the dashboard data-access module
pub const QUERY_MODULE: &str = include_str!("assets/query.ts");

/// `.env` and `.env.example`
pub const ENV_FILE: &str = "VITE_SANKHYA_URL=\nVITE_SANKHYA_TOKEN=\n";

/// `src/vite-env.d.ts`
pub const VITE_ENV_DTS: &str = "/// <reference types=\"vite/client\" />\n";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::check_node;
    use regex::Regex;
    use serde_json::Value;
    use std::process::Command;

    #[test]
    fn test_variant_config_keeps_base_plugin_and_alias() {
        assert!(VITE_CONFIG_VARIANT.contains("react()"));
        assert!(VITE_CONFIG_VARIANT.contains("convertToSankhyaBI()"));
        assert!(VITE_CONFIG_VARIANT.contains(r#""@": path.resolve(__dirname, "./src")"#));
        assert!(VITE_CONFIG.contains(r#""@": path.resolve(__dirname, "./src")"#));
        assert!(!VITE_CONFIG.contains("convertToSankhyaBI"));
    }

    #[test]
    fn test_env_placeholders_are_empty() {
        let keys: Vec<&str> = ENV_FILE.lines().collect();
        assert_eq!(keys, vec!["VITE_SANKHYA_URL=", "VITE_SANKHYA_TOKEN="]);
    }

    #[test]
    fn test_query_module_date_contract() {
        assert!(QUERY_MODULE.contains(r"/^(\d{2})(\d{2})(\d{4})/"));
        assert!(QUERY_MODULE.contains(r"/^\d{8}/"));
        assert!(QUERY_MODULE.contains("export function parseDate"));
        assert!(QUERY_MODULE.contains("export function mapRows"));
        assert!(QUERY_MODULE.contains("export async function query"));
        assert!(QUERY_MODULE.contains("import.meta.env.VITE_SANKHYA_URL"));
    }

    /// The date helpers of `query.ts` (everything above `query`) as plain JavaScript
    fn date_helpers_as_js() -> String {
        let start = QUERY_MODULE.find("const DATE_PATTERN").unwrap();
        let end = QUERY_MODULE.find("export async function query").unwrap();

        let mut js = QUERY_MODULE[start..end].replace("export ", "");
        for (pattern, replacement) in [
            // generic parameters
            (r"function (\w+)<[^(]*>\(", "function $1("),
            // return types
            (r"\)\s*:\s*[^{=;]+\{", ") {"),
            // annotated locals
            (r"(const|let) (\w+): [^=]+=", "$1 $2 ="),
            // annotated parameters
            (r"(\w+): [A-Za-z]+(\[\])*", "$1"),
            // casts
            (r" as [A-Z]\w*;", ";"),
        ] {
            js = Regex::new(pattern)
                .unwrap()
                .replace_all(&js, replacement)
                .into_owned();
        }
        js
    }

    // Expected values are built with the same local-time Date calls, so the
    // assertions hold in any TZ.
    const DATE_CASES: &str = r#"
const literalYear = (y, m, d) => {
  const date = new Date(2000, 0, 1);
  date.setFullYear(y, m, d);
  return date.toISOString();
};
console.log(JSON.stringify({
  christmas: parseDate("25122023extra"),
  christmasExpected: new Date(2023, 11, 25).toISOString(),
  tooShort: parseDate("2023"),
  notADate: parseDate("99999999"),
  bothWays: parseDate("20121012"),
  bothWaysExpected: new Date(1012, 11, 20).toISOString(),
  shortYear: parseDate("01010050"),
  shortYearExpected: literalYear(50, 0, 1),
  newYear: new Date(2024, 0, 1).toISOString(),
  rows: mapRows(
    [{ name: "dt" }, { name: "qty" }],
    [["20240101", 1], ["hello", 2], ["2023", 3]]
  ),
}));
"#;

    #[test]
    fn test_query_module_dates_under_node() {
        if !check_node().available {
            eprintln!("Node.js not installed, skipping");
            return;
        }

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("dates.js");
        std::fs::write(&script, format!("{}\n{}", date_helpers_as_js(), DATE_CASES)).unwrap();

        let output = Command::new("node").arg(&script).output().unwrap();
        assert!(
            output.status.success(),
            "node failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        let result: Value = serde_json::from_slice(&output.stdout).unwrap();

        // DDMMYYYY at the start of the string, local midnight
        assert!(result["christmas"].is_string());
        assert_eq!(result["christmas"], result["christmasExpected"]);
        assert_eq!(result["tooShort"], Value::Null);
        assert_eq!(result["notADate"], Value::Null);

        // Digits valid as DDMMYYYY never fall back to YYYYMMDD
        assert_eq!(result["bothWays"], result["bothWaysExpected"]);
        assert_eq!(result["shortYear"], result["shortYearExpected"]);

        let rows = result["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["dt"], result["newYear"]);
        assert_eq!(rows[0]["qty"], 1);
        assert_eq!(rows[1]["dt"], "hello");
        assert_eq!(rows[2]["dt"], "2023");
    }

    #[test]
    fn test_tailwind_directives() {
        assert_eq!(INDEX_CSS.lines().count(), 3);
        assert!(INDEX_CSS.lines().all(|l| l.starts_with("@tailwind ")));
        assert!(TAILWIND_CONFIG.contains("./src/**/*.{js,ts,jsx,tsx}"));
    }
}
