//! Flyweight: share intrinsic state between many objects.
//!
//! [`FlyweightPool`] caches one `Arc<T>` per discriminator. The first request
//! for a key builds the value with the pool's creator; later requests get the
//! same allocation back. Creation runs under the DashMap shard lock for that
//! key, so concurrent first requests still produce a single instance.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

pub struct FlyweightPool<T> {
    shared: DashMap<String, Arc<T>>,
    create: Box<dyn Fn(&str) -> T + Send + Sync>,
}

impl<T> FlyweightPool<T> {
    /// `create` runs while the pool holds the lock for the requested key's
    /// shard. It must not call back into the same pool: a nested
    /// `get_shared` on that shard deadlocks.
    pub fn new<F>(create: F) -> Self
    where
        F: Fn(&str) -> T + Send + Sync + 'static,
    {
        Self {
            shared: DashMap::new(),
            create: Box::new(create),
        }
    }

    pub fn get_shared(&self, key: &str) -> Arc<T> {
        self.shared
            .entry(key.to_string())
            .or_insert_with(|| {
                debug!(key, "creating flyweight");
                Arc::new((self.create)(key))
            })
            .clone()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.shared.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.shared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.is_empty()
    }
}

/// Intrinsic state shared by every parked car of the same model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarModel {
    pub name: String,
    pub make: String,
}

impl CarModel {
    pub fn pool() -> FlyweightPool<CarModel> {
        FlyweightPool::new(|name| {
            let make = name.split_whitespace().next().unwrap_or(name).to_string();
            CarModel {
                name: name.to_string(),
                make,
            }
        })
    }
}

/// Extrinsic state lives outside the flyweight.
#[derive(Debug, Clone)]
pub struct ParkedCar {
    pub model: Arc<CarModel>,
    pub plate: String,
    pub owner: String,
}

impl ParkedCar {
    pub fn new(
        pool: &FlyweightPool<CarModel>,
        model: &str,
        plate: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            model: pool.get_shared(model),
            plate: plate.into(),
            owner: owner.into(),
        }
    }
}

pub fn demo() -> Vec<String> {
    let pool = CarModel::pool();
    let cars = vec![
        ParkedCar::new(&pool, "Ford Focus", "AB-123", "ana"),
        ParkedCar::new(&pool, "Ford Focus", "CD-456", "ben"),
        ParkedCar::new(&pool, "Honda Civic", "EF-789", "cho"),
    ];

    let mut lines: Vec<String> = cars
        .iter()
        .map(|car| format!("{} parks a {} ({})", car.owner, car.model.name, car.plate))
        .collect();
    lines.push(format!("{} cars share {} models", cars.len(), pool.len()));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rayon::prelude::*;

    #[test]
    fn test_same_key_same_instance() {
        let pool = CarModel::pool();
        let a = pool.get_shared("Ford Focus");
        let b = pool.get_shared("Ford Focus");
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.make, "Ford");
    }

    #[test]
    fn test_different_keys_distinct() {
        let pool = CarModel::pool();
        let a = pool.get_shared("Ford Focus");
        let b = pool.get_shared("Honda Civic");
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_parked_cars_share_model() {
        let pool = CarModel::pool();
        let a = ParkedCar::new(&pool, "Ford Focus", "1", "x");
        let b = ParkedCar::new(&pool, "Ford Focus", "2", "y");
        assert!(Arc::ptr_eq(&a.model, &b.model));
        assert!(pool.contains("Ford Focus"));
        assert!(!pool.contains("Honda Civic"));
    }

    #[test]
    fn test_concurrent_first_access() {
        let pool = CarModel::pool();
        let models: Vec<Arc<CarModel>> = (0..100)
            .into_par_iter()
            .map(|i| pool.get_shared(if i % 2 == 0 { "even" } else { "odd" }))
            .collect();

        assert_eq!(pool.len(), 2);
        let even = pool.get_shared("even");
        assert_eq!(
            models.iter().filter(|m| Arc::ptr_eq(m, &even)).count(),
            50
        );
    }

    proptest! {
        #[test]
        fn test_identity_by_discriminator(a in "[a-z]{1,8}", b in "[a-z]{1,8}") {
            let pool = FlyweightPool::new(|key: &str| key.len());
            let first = pool.get_shared(&a);
            let second = pool.get_shared(&b);
            prop_assert_eq!(Arc::ptr_eq(&first, &second), a == b);
        }
    }
}
