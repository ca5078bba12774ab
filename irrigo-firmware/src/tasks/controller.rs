//! Controller task
//!
//! The cooperative main loop. Every tick it serves the console,
//! advances the tap and the cycle, and persists the parameter image if
//! a command changed it.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use irrigo_core::controller::{ConsoleRouter, Controller};
use irrigo_core::time;
use irrigo_hal_rp2040::flash::FlashStorage;
use irrigo_hal_rp2040::uart::BufferedConsole;

use crate::board::IrrigoBoard;
use crate::console::ConsoleSession;
use crate::persist::ParameterPersistence;

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u32 = 100;

/// Controller task - polls the controller and console every tick
#[embassy_executor::task]
pub async fn controller_task(
    mut controller: Controller<IrrigoBoard>,
    router: ConsoleRouter<IrrigoBoard>,
    mut console: ConsoleSession<BufferedConsole>,
    mut persistence: ParameterPersistence<FlashStorage<'static>>,
) {
    info!("Controller task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));
    let start = Instant::now();

    loop {
        ticker.next().await;

        // Milliseconds since boot, wrapping after ~49 days
        let now = time::Instant::from_millis(start.elapsed().as_millis() as u32);

        // Commands first, so a stop lands before this tick's cycle step
        console.poll(&router, &mut controller);

        match controller.poll(now) {
            Some(event) if event.is_abort() => {
                warn!("Cycle abandoned: {:?}", event);
            }
            Some(event) => {
                info!("Cycle event {:?}, now {}", event, controller.phase().as_str());
            }
            None => {}
        }

        persistence
            .save_if_dirty(controller.store_mut().eeprom_mut())
            .await;
    }
}
