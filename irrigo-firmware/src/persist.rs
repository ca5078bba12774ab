//! Parameter persistence
//!
//! The settings image lives in RAM and is written back to flash as a
//! single record whenever a console command changed it.

use defmt::*;

use irrigo_hal_rp2040::flash::{FlashError, StorageKey};
// Import the FlashStorage trait to bring methods into scope
use irrigo_hal_rp2040::FlashStorageTrait;

use crate::board::ParameterImage;

/// Largest record accepted when reading back the image
const MAX_RECORD_SIZE: usize = 32;

/// Parameter persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PersistError {
    /// Flash operation failed
    Flash(FlashError),
}

impl From<FlashError> for PersistError {
    fn from(e: FlashError) -> Self {
        PersistError::Flash(e)
    }
}

/// Parameter image persistence manager
pub struct ParameterPersistence<S> {
    storage: S,
}

impl<S: FlashStorageTrait> ParameterPersistence<S> {
    /// Create a new persistence manager
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Load the image from flash
    pub async fn load(&mut self) -> Result<ParameterImage, PersistError> {
        let mut buffer = [0u8; MAX_RECORD_SIZE];
        let len = self
            .storage
            .read(StorageKey::Parameters, &mut buffer)
            .await?;

        debug!("Read {} bytes of parameters from flash", len);
        Ok(ParameterImage::load(&buffer[..len]))
    }

    /// Load the image, starting erased if flash holds none
    pub async fn load_or_erased(&mut self) -> ParameterImage {
        match self.load().await {
            Ok(image) => {
                info!("Loaded parameters from flash");
                image
            }
            Err(PersistError::Flash(FlashError::NotFound)) => {
                info!("No parameters in flash");
                ParameterImage::erased()
            }
            Err(e) => {
                warn!("Failed to load parameters: {:?}", e);
                ParameterImage::erased()
            }
        }
    }

    /// Write the image to flash and mark it clean
    pub async fn save(&mut self, image: &mut ParameterImage) -> Result<(), PersistError> {
        self.storage
            .write(StorageKey::Parameters, image.as_bytes())
            .await?;
        image.mark_clean();
        Ok(())
    }

    /// Write the image only if it changed
    ///
    /// A failed write leaves the image dirty so the next call retries.
    pub async fn save_if_dirty(&mut self, image: &mut ParameterImage) {
        if !image.is_dirty() {
            return;
        }
        match self.save(image).await {
            Ok(()) => debug!("Parameters saved"),
            Err(e) => warn!("Failed to save parameters: {:?}", e),
        }
    }
}
