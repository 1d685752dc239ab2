//! Expression logging
//!
//! `debug_log_expr!(expr)` logs `expr = <rendering>` through the catalog.
//! When the value's descriptor is not recognized it logs the descriptor, the
//! expression text and the call site instead, so the catalog can be extended
//! later. Both macros do nothing in builds without `debug_assertions`.

use crate::config::{self, Config};

use super::catalog::render_with;
use super::describe::{Describer, Localized, NoHost};
use super::encode::Encode;

/// Source location of a logging call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub module: &'static str,
    pub file: &'static str,
    pub line: u32,
}

/// Capture the current [`CallSite`]
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::debug::CallSite {
            module: module_path!(),
            file: file!(),
            line: line!(),
        }
    };
}

/// Log an expression and its rendered value
///
/// Evaluates to the rendering, or `None` if nothing was rendered.
#[macro_export]
macro_rules! debug_log_expr {
    ($expr:expr) => {
        $crate::debug::log_expr(&$expr, stringify!($expr), $crate::call_site!())
    };
}

/// Log the enclosing module path
#[macro_export]
macro_rules! debug_log_function {
    () => {
        $crate::debug::log_function($crate::call_site!())
    };
}

/// Log `value` using the shared config and no host memory
pub fn log_expr<T: Encode + ?Sized>(value: &T, expr: &str, site: CallSite) -> Option<String> {
    if !cfg!(debug_assertions) {
        return None;
    }
    log_expr_with(config::shared(), &NoHost, value, expr, site)
}

/// Log `value` with an explicit config and host
///
/// Decimals render with the configured locale separator, whatever the host's.
pub fn log_expr_with<T, D>(
    config: &Config,
    host: &D,
    value: &T,
    expr: &str,
    site: CallSite,
) -> Option<String>
where
    T: Encode + ?Sized,
    D: Describer + ?Sized,
{
    if !cfg!(debug_assertions) || !config.diagnostics.enabled {
        return None;
    }

    let descriptor = value.descriptor();
    let host = Localized::new(host, config.locale.decimal_separator);
    let text = render_with(&descriptor, &value.raw_bytes(), &host);
    match &text {
        Some(text) => tracing::debug!("{} = {}", expr, text),
        None if config.diagnostics.report_unrecognized => tracing::warn!(
            "Unknown type descriptor: {} for expression {} in {}, file {}, line {}",
            descriptor,
            expr,
            site.module,
            site.file,
            site.line
        ),
        None => {}
    }
    text
}

pub fn log_function(site: CallSite) {
    if cfg!(debug_assertions) {
        tracing::debug!("{}", site.module);
    }
}

#[cfg(all(test, debug_assertions))]
mod tests {
    use super::*;
    use crate::config::{DiagnosticsConfig, LocaleConfig};
    use crate::debug::decimal::Decimal;
    use crate::debug::describe::LinearMemory;
    use crate::debug::encode::CStringPtr;
    use crate::debug::geometry::Coordinate;

    fn site() -> CallSite {
        CallSite {
            module: "tests",
            file: "log.rs",
            line: 1,
        }
    }

    #[test]
    fn test_log_expr_renders() {
        let config = Config::default();
        let speed = 3.25f64;
        assert_eq!(
            log_expr_with(&config, &NoHost, &speed, "speed", site()).as_deref(),
            Some("3.250000")
        );
    }

    #[test]
    fn test_log_expr_unrecognized() {
        let config = Config::default();
        assert_eq!(log_expr_with(&config, &NoHost, &9u8, "byte", site()), None);
    }

    #[test]
    fn test_log_expr_disabled() {
        let config = Config {
            diagnostics: DiagnosticsConfig {
                enabled: false,
                report_unrecognized: true,
            },
            ..Config::default()
        };
        assert_eq!(log_expr_with(&config, &NoHost, &true, "flag", site()), None);
    }

    #[test]
    fn test_log_expr_with_host_memory() {
        let memory = LinearMemory::new(0x100, b"player\0");
        let name = CStringPtr(0x100);
        assert_eq!(
            log_expr_with(&Config::default(), &memory, &name, "name", site()).as_deref(),
            Some("player")
        );
    }

    #[test]
    fn test_log_expr_uses_configured_separator() {
        let config = Config {
            locale: LocaleConfig {
                decimal_separator: ',',
            },
            ..Config::default()
        };
        let price = Decimal::new(1999, -2, false);
        assert_eq!(
            log_expr_with(&config, &NoHost, &price, "price", site()).as_deref(),
            Some("19,99")
        );

        // The config wins over a host with its own separator
        let memory = LinearMemory::new(0, &[]).with_decimal_separator('.');
        assert_eq!(
            log_expr_with(&config, &memory, &price, "price", site()).as_deref(),
            Some("19,99")
        );
        assert_eq!(
            log_expr_with(&Config::default(), &memory, &price, "price", site()).as_deref(),
            Some("19.99")
        );
    }

    #[test]
    fn test_macros() {
        let here = crate::call_site!();
        assert_eq!(here.module, module_path!());
        assert!(here.file.ends_with("log.rs"));

        // The macro goes through the shared config, so compare against the
        // same path rather than a fixed rendering
        let position = Coordinate::new(37.5, -122.2);
        let expected = log_expr(&position, "position", here);
        assert_eq!(crate::debug_log_expr!(position), expected);
        if let Some(text) = expected {
            assert!(text.starts_with("{latitude=37.5,"));
        }
        crate::debug_log_function!();
    }
}
