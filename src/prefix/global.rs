// Process-wide prefix table. Writers take the lock exclusively; quantities never touch it.

use crate::error::Result;
use crate::prefix::table::PrefixTable;
use crate::prefix::token::PrefixToken;
use crate::prefix::types::Prefix;
use lazy_static::lazy_static;
use parking_lot::RwLock;

lazy_static! {
    static ref PREFIXES: RwLock<PrefixTable> = RwLock::new(PrefixTable::standard());
}

pub fn resolve(token: impl Into<PrefixToken>) -> Result<Prefix> {
    PREFIXES.read().resolve(token)
}

pub fn register(name: &str, symbol: &str, scale: f64) -> Result<Prefix> {
    PREFIXES.write().register(name, symbol, scale)
}

pub fn unregister(name: &str) -> Result<Prefix> {
    PREFIXES.write().unregister(name)
}

/// Copy of the current table, for listing without holding the lock.
pub fn snapshot() -> PrefixTable {
    PREFIXES.read().clone()
}

/// Run `f` with exclusive access, e.g. to apply several registrations atomically.
pub fn with_table_mut<R>(f: impl FnOnce(&mut PrefixTable) -> R) -> R {
    f(&mut PREFIXES.write())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_global_registry_round_trip() {
        register("globaltestprefix", "Qg", 1e27).unwrap();
        assert_eq!(resolve("globaltestprefix").unwrap().scale(), 1e27);
        assert!(snapshot().contains("globaltestprefix"));

        unregister("globaltestprefix").unwrap();
        assert_eq!(
            resolve("globaltestprefix").unwrap_err().kind(),
            ErrorKind::PrefixNotFound
        );
    }

    #[test]
    fn test_global_standard_lookup() {
        assert_eq!(resolve("k").unwrap().name(), "kilo");
        assert_eq!(
            unregister("").unwrap_err().kind(),
            ErrorKind::ProtectedPrefix
        );
    }

    #[test]
    fn test_with_table_mut() {
        let len = with_table_mut(|table| {
            table.register("globalbatch", "Qb", 1e-27).unwrap();
            let len = table.len();
            table.unregister("globalbatch").unwrap();
            len
        });
        assert!(len >= 22);
        assert!(resolve("globalbatch").is_err());
    }
}
