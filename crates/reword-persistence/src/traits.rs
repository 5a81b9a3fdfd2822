use async_trait::async_trait;
use reword_core::RewordResult;
use reword_domain::ConfigSlice;
use serde_json::Value;

/// Abstract keyed storage for configuration slices.
///
/// Implementations handle the storage medium; callers work with one durable
/// key per slice. There are no cross-key transactions: writing a slice is
/// all-or-nothing for that slice only.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SliceStore: Send + Sync {
    /// Read the raw value stored under `key`. `Ok(None)` means the key has
    /// never been written.
    async fn read_value(&self, key: &str) -> RewordResult<Option<Value>>;

    /// Durably write `value` under `key`. Resolves once the value is on
    /// stable storage.
    async fn write_value(&self, key: &str, value: Value) -> RewordResult<()>;
}

/// Typed access on top of any [`SliceStore`].
///
/// `get_slice` never fails: an absent or unreadable slice degrades to the
/// slice default, which is the contract the rest of the application relies
/// on at load time.
#[async_trait]
pub trait SliceStoreExt: SliceStore {
    async fn get_slice<S: ConfigSlice>(&self) -> S {
        match self.read_value(S::KEY).await {
            Ok(Some(value)) => match serde_json::from_value(value) {
                Ok(slice) => slice,
                Err(e) => {
                    tracing::warn!(
                        "Stored slice '{}' has an unexpected shape, substituting default: {}",
                        S::KEY,
                        e
                    );
                    S::default_value()
                }
            },
            Ok(None) => S::default_value(),
            Err(e) => {
                tracing::warn!("Failed to read slice '{}', substituting default: {}", S::KEY, e);
                S::default_value()
            }
        }
    }

    async fn put_slice<S: ConfigSlice>(&self, slice: &S) -> RewordResult<()> {
        let value = serde_json::to_value(slice)
            .map_err(|e| reword_core::RewordError::Serialization(e.to_string()))?;
        self.write_value(S::KEY, value).await
    }
}

#[async_trait]
impl<T: SliceStore + ?Sized> SliceStoreExt for T {}
