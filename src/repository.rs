// 🗂️ HOA Repository - Identity assignment in front of persistence

use crate::entities::hoa::{Hoa, HoaData};
use crate::error::StoreError;
use crate::persistence::HoaPersistence;

pub struct HoaRepository<P: HoaPersistence> {
    persistence: P,
}

impl<P: HoaPersistence> HoaRepository<P> {
    pub fn new(persistence: P) -> Self {
        HoaRepository { persistence }
    }

    /// Build an entity from scraped data with a fresh UUID identity
    pub fn create(&self, data: HoaData) -> Hoa {
        Hoa::from_data(uuid::Uuid::new_v4().to_string(), data)
    }

    pub fn save(&self, hoas: Vec<Hoa>) -> Result<Vec<Hoa>, StoreError> {
        self.persistence.save(hoas)
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }
}
