use crate::error::PersistError;
use crate::store::FlatStore;
use crate::types::workout::Workout;

pub const WORKOUTS_KEY: &str = "workouts";

/// Writes the whole collection under [`WORKOUTS_KEY`], replacing any
/// previous value.
pub fn save<S: FlatStore + ?Sized>(store: &mut S, workouts: &[Workout]) -> Result<(), PersistError> {
    let encoded = serde_json::to_string(workouts).map_err(PersistError::Encode)?;
    store.set(WORKOUTS_KEY, &encoded)?;
    Ok(())
}

/// Reads the collection back. A missing key, or a stored JSON `null`,
/// yields an empty collection.
pub fn load<S: FlatStore + ?Sized>(store: &S) -> Result<Vec<Workout>, PersistError> {
    let Some(encoded) = store.get(WORKOUTS_KEY)? else {
        return Ok(Vec::new());
    };
    let workouts: Option<Vec<Workout>> =
        serde_json::from_str(&encoded).map_err(PersistError::Corrupt)?;
    Ok(workouts.unwrap_or_default())
}

pub fn reset<S: FlatStore + ?Sized>(store: &mut S) -> Result<(), PersistError> {
    store.remove(WORKOUTS_KEY)?;
    Ok(())
}
