use gloo::storage::{LocalStorage, Storage};

use crate::config::STORAGE_KEY;
use crate::error::StoreError;
use crate::records::ProfitLedger;

/// Result of reading the stored history.
#[derive(Debug, Default)]
pub struct Loaded {
    pub ledger: ProfitLedger,
    /// Entries dropped because they did not parse.
    pub skipped: usize,
}

impl Loaded {
    /// A missing blob is an empty history.
    pub fn from_blob(blob: Option<&str>) -> Result<Self, StoreError> {
        match blob {
            None => Ok(Self::default()),
            Some(json) => {
                let (ledger, skipped) = ProfitLedger::decode(json)?;
                Ok(Self { ledger, skipped })
            }
        }
    }
}

pub trait RecordStore {
    fn load(&self) -> Result<Loaded, StoreError>;
    fn save(&self, ledger: &ProfitLedger) -> Result<(), StoreError>;
}

/// `window.localStorage`, one JSON array under [`STORAGE_KEY`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl RecordStore for BrowserStore {
    fn load(&self) -> Result<Loaded, StoreError> {
        let blob = LocalStorage::raw()
            .get_item(STORAGE_KEY)
            .map_err(|e| StoreError::Storage(format!("{e:?}")))?;
        Loaded::from_blob(blob.as_deref())
    }

    fn save(&self, ledger: &ProfitLedger) -> Result<(), StoreError> {
        let json = ledger.encode()?;
        LocalStorage::raw()
            .set_item(STORAGE_KEY, &json)
            .map_err(|e| StoreError::Storage(format!("{e:?}")))
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use std::cell::RefCell;

    use super::*;

    /// Keeps the serialized blob in memory, the way local storage would.
    #[derive(Default)]
    pub struct MemoryStore {
        pub blob: RefCell<Option<String>>,
    }

    impl RecordStore for MemoryStore {
        fn load(&self) -> Result<Loaded, StoreError> {
            Loaded::from_blob(self.blob.borrow().as_deref())
        }

        fn save(&self, ledger: &ProfitLedger) -> Result<(), StoreError> {
            *self.blob.borrow_mut() = Some(ledger.encode()?);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::memory::MemoryStore;
    use super::*;
    use crate::currency::{Currency, ExchangeRates};
    use crate::records::ProfitRecord;
    use crate::surebet::calculate;

    #[test]
    fn missing_key_loads_empty() {
        let store = MemoryStore::default();
        let loaded = store.load().unwrap();
        assert!(loaded.ledger.is_empty());
        assert_eq!(loaded.skipped, 0);
    }

    #[test]
    fn saved_ledger_loads_back() {
        let store = MemoryStore::default();
        let mut ledger = ProfitLedger::default();
        let calc = calculate(2.2, 2.0, 250.0).unwrap();
        ledger.add(ProfitRecord::from_calculation(
            &calc,
            Currency::Usd,
            Currency::Eur,
            &ExchangeRates::default(),
            Utc::now(),
        ));
        store.save(&ledger).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.ledger, ledger);
    }

    #[test]
    fn last_write_wins() {
        let store = MemoryStore::default();
        let mut ledger = ProfitLedger::default();
        let calc = calculate(2.2, 2.0, 100.0).unwrap();
        ledger.add(ProfitRecord::from_calculation(&calc, Currency::Usd, Currency::Usd, &ExchangeRates::default(), Utc::now()));
        store.save(&ledger).unwrap();
        ledger.clear();
        store.save(&ledger).unwrap();
        assert!(store.load().unwrap().ledger.is_empty());
    }

    #[test]
    fn blob_decoding_is_lenient_per_record() {
        let blob = r#"[
            {"id":"1","date":"2024-05-15T16:00:00Z","profit":3,"profitPercent":1.5,
             "quota1":2.1,"quota2":2.05,"investment":null,"currency":"USD"},
            {"id":"2","date":"yesterday"}
        ]"#;
        let loaded = Loaded::from_blob(Some(blob)).unwrap();
        assert_eq!(loaded.ledger.len(), 1);
        assert_eq!(loaded.skipped, 1);
        assert!(Loaded::from_blob(None).unwrap().ledger.is_empty());
    }

    #[test]
    fn corrupt_blob_is_an_error() {
        let store = MemoryStore::default();
        *store.blob.borrow_mut() = Some("{not json".into());
        assert!(matches!(store.load(), Err(StoreError::Decode(_))));
    }
}
