//! Forbidden API patterns scanned for in integration source code.
//!
//! This is a best-effort lint. String concatenation, aliasing or any other
//! indirection gets past it; isolation is enforced by the host sandbox.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// How bad a rule hit is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Score deduction for a rule that fires at least once.
    pub fn penalty(&self) -> i32 {
        match self {
            Severity::Critical => 30,
            Severity::High => 20,
            Severity::Medium => 10,
        }
    }

    /// Critical and high hits are errors, medium hits are warnings.
    pub fn is_error(&self) -> bool {
        !matches!(self, Severity::Medium)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "critical"),
            Severity::High => write!(f, "high"),
            Severity::Medium => write!(f, "medium"),
        }
    }
}

/// One entry of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct SecurityRule {
    pub id: &'static str,
    pub pattern: &'static Regex,
    pub severity: Severity,
    pub message: &'static str,
}

impl SecurityRule {
    /// Number of non-overlapping matches in `content`.
    pub fn count_matches(&self, content: &str) -> usize {
        self.pattern.find_iter(content).count()
    }
}

/// Module specifier prefix: `require('x')`, `import('x')`, `import 'x'`, `from 'x'`.
macro_rules! module_pattern {
    ($modules:literal) => {
        concat!(
            r#"(?:\brequire\s*\(\s*|\bimport\s*\(?\s*|\bfrom\s+)['"`](?:node:)?"#,
            $modules,
            r#"['"`]"#
        )
    };
}

pub static EVAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\beval\s*\(").unwrap());

pub static FUNCTION_CONSTRUCTOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bnew\s+Function\s*\(").unwrap());

pub static CHILD_PROCESS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bchild_process\b").unwrap());

pub static VM_MODULE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(module_pattern!("vm")).unwrap());

pub static BOT_TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bclient\s*\.\s*token\b").unwrap());

pub static FS_MODULE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(module_pattern!("fs(?:/promises)?")).unwrap());

pub static PROCESS_EXIT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bprocess\s*\.\s*exit\s*\(").unwrap());

pub static RAW_SOCKET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(module_pattern!("(?:net|dgram|tls)")).unwrap());

pub static WORKER_THREADS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(module_pattern!("worker_threads")).unwrap());

pub static PROTOTYPE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__proto__|\bconstructor\s*\.\s*prototype\b").unwrap());

/// `require(` whose argument is not a string literal.
pub static DYNAMIC_REQUIRE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\brequire\s*\(\s*[^'"`\s)]"#).unwrap());

pub static PROCESS_ENV_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bprocess\s*\.\s*env\b").unwrap());

pub static HTTP_MODULE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(module_pattern!("https?")).unwrap());

pub static SET_INTERVAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bsetInterval\s*\(").unwrap());

pub static GLOBAL_OBJECT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bglobal(?:This)?\s*\.").unwrap());

/// The full rule table, in evaluation order.
pub fn security_rules() -> Vec<SecurityRule> {
    vec![
        SecurityRule {
            id: "eval",
            pattern: &EVAL_PATTERN,
            severity: Severity::Critical,
            message: "Use of eval() is forbidden",
        },
        SecurityRule {
            id: "function_constructor",
            pattern: &FUNCTION_CONSTRUCTOR_PATTERN,
            severity: Severity::Critical,
            message: "Dynamic code via new Function() is forbidden",
        },
        SecurityRule {
            id: "child_process",
            pattern: &CHILD_PROCESS_PATTERN,
            severity: Severity::Critical,
            message: "Spawning processes (child_process) is forbidden",
        },
        SecurityRule {
            id: "vm_module",
            pattern: &VM_MODULE_PATTERN,
            severity: Severity::Critical,
            message: "The vm module is forbidden",
        },
        SecurityRule {
            id: "bot_token",
            pattern: &BOT_TOKEN_PATTERN,
            severity: Severity::Critical,
            message: "Accessing the bot token (client.token) is forbidden",
        },
        SecurityRule {
            id: "fs_module",
            pattern: &FS_MODULE_PATTERN,
            severity: Severity::High,
            message: "Direct filesystem access is not allowed; use the settings API",
        },
        SecurityRule {
            id: "process_exit",
            pattern: &PROCESS_EXIT_PATTERN,
            severity: Severity::High,
            message: "Calling process.exit() is not allowed",
        },
        SecurityRule {
            id: "raw_socket",
            pattern: &RAW_SOCKET_PATTERN,
            severity: Severity::High,
            message: "Raw network sockets (net, dgram, tls) are not allowed",
        },
        SecurityRule {
            id: "worker_threads",
            pattern: &WORKER_THREADS_PATTERN,
            severity: Severity::High,
            message: "Worker threads are not allowed",
        },
        SecurityRule {
            id: "prototype_pollution",
            pattern: &PROTOTYPE_PATTERN,
            severity: Severity::High,
            message: "Prototype manipulation is not allowed",
        },
        SecurityRule {
            id: "dynamic_require",
            pattern: &DYNAMIC_REQUIRE_PATTERN,
            severity: Severity::High,
            message: "Dynamic require() with a non-literal argument is not allowed",
        },
        SecurityRule {
            id: "process_env",
            pattern: &PROCESS_ENV_PATTERN,
            severity: Severity::Medium,
            message: "Reading process.env is discouraged; declare a setting instead",
        },
        SecurityRule {
            id: "http_module",
            pattern: &HTTP_MODULE_PATTERN,
            severity: Severity::Medium,
            message: "Use axios or sendWebhook() instead of the http/https modules",
        },
        SecurityRule {
            id: "set_interval",
            pattern: &SET_INTERVAL_PATTERN,
            severity: Severity::Medium,
            message: "setInterval() keeps running after unload; use node-cron or event hooks",
        },
        SecurityRule {
            id: "global_object",
            pattern: &GLOBAL_OBJECT_PATTERN,
            severity: Severity::Medium,
            message: "Touching the global object is discouraged",
        },
    ]
}
