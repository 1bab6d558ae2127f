//! TypeScript project configuration
//!
//! Both files carry the `@/*` alias shadcn/ui expects; `tsconfig.app.json`
//! holds the compiler options the Vite react-swc-ts template ships with.

use serde_json::{json, Value};

/// `@/*` resolves to the project's `src` directory
fn alias_paths() -> Value {
    json!({ "@/*": ["./src/*"] })
}

fn render(value: &Value) -> String {
    // Serializing a `json!` literal cannot fail
    let mut out = serde_json::to_string_pretty(value).unwrap_or_default();
    out.push('\n');
    out
}

/// `tsconfig.json`: project references plus the alias for editor tooling
pub fn tsconfig_json() -> String {
    render(&json!({
        "files": [],
        "references": [
            { "path": "./tsconfig.app.json" },
            { "path": "./tsconfig.node.json" }
        ],
        "compilerOptions": {
            "baseUrl": ".",
            "paths": alias_paths()
        }
    }))
}

/// `tsconfig.app.json`: compiler options for the application sources
pub fn tsconfig_app_json() -> String {
    render(&json!({
        "compilerOptions": {
            "tsBuildInfoFile": "./node_modules/.tmp/tsconfig.app.tsbuildinfo",
            "target": "ES2020",
            "useDefineForClassFields": true,
            "lib": ["ES2020", "DOM", "DOM.Iterable"],
            "module": "ESNext",
            "skipLibCheck": true,

            "moduleResolution": "bundler",
            "allowImportingTsExtensions": true,
            "isolatedModules": true,
            "moduleDetection": "force",
            "noEmit": true,
            "jsx": "react-jsx",

            "strict": true,
            "noUnusedLocals": true,
            "noUnusedParameters": true,
            "noFallthroughCasesInSwitch": true,
            "noUncheckedSideEffectImports": true,

            "baseUrl": ".",
            "paths": alias_paths()
        },
        "include": ["src"]
    }))
}
