#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Async, `no_std` driver for the Silead GSL1680 capacitive touchscreen
//! controller.
//!
//! The GSL1680 keeps nothing in non-volatile storage: on every power-up the
//! host uploads a vendor-supplied firmware image over I²C before the
//! controller reports a single contact. This crate wraps that bring-up dance
//! and the interrupt-driven coordinate readout:
//!
//! - Reset, clock and start command sequencing with the documented settling
//!   delays
//! - Verbatim replay of the vendor memory image (page selects plus 32-bit
//!   words)
//! - Falling-edge "data ready" handling via `embedded-hal-async`'s
//!   [`Wait`] trait
//! - Decoding of the two fixed finger slots of each 44-byte report
//! - Rotation of raw coordinates into the display's orientation
//! - A fan-out facade ([`Touchscreen`]) that publishes every decoded point
//!   to a set of subscribers
//!
//! The controller sits at the fixed 7-bit address `0x40` on a 100 kHz bus.
//! Configure the interrupt line in the host HAL as an input with
//! falling-edge detection; a ~1 ms debounce is recommended to suppress
//! electrical noise.
//!
//! ```no_run
//! use embedded_hal_async::{delay::DelayNs, digital::Wait, i2c::{I2c, SevenBitAddress}};
//! use gsl1680::{Config, Gsl1680, Orientation};
//!
//! async fn example<I2C, INT, D, E>(i2c: I2C, int: INT, mut delay: D) -> Result<(), gsl1680::Error<E>>
//! where
//!   I2C: I2c<SevenBitAddress, Error = E>,
//!   INT: Wait,
//!   D: DelayNs,
//! {
//!   let config = Config::default().with_extents(480, 272).with_orientation(Orientation::Deg90);
//!   let mut touch = Gsl1680::new(i2c, int, config);
//!   touch.initialize(&mut delay).await?;
//!
//!   loop {
//!     let touches = touch.next_touches().await?;
//!     for point in touches.iter() {
//!       // draw, hit-test, ...
//!       let _ = point;
//!     }
//!   }
//! }
//! ```

mod config;
mod event;
mod fw;
mod init;
mod reg;
mod rw;
#[cfg(test)]
mod testutil;
mod touchscreen;

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::digital::Wait;
use embedded_hal_async::i2c::{I2c, SevenBitAddress};

pub use config::*;
pub use event::{Point, Touches};
pub use touchscreen::*;

/// Errors that can occur while interacting with the controller.
#[derive(Debug, defmt::Format)]
pub enum Error<E> {
  /// I²C bus transaction failed with the underlying driver error.
  I2c(E),
  /// A non-zero orientation is configured while an extent is still zero.
  InvalidExtents,
  /// The fan-out facade's subscriber list is full.
  SubscriberLimit,
}

/// Driver for the Silead GSL1680 touchscreen controller.
///
/// The driver owns the I²C peripheral and the "data ready" interrupt line.
/// Create an instance with [`Gsl1680::new`], then call
/// [`Gsl1680::initialize`] once to upload the firmware image and start the
/// controller before reading any touches.
pub struct Gsl1680<I, INT> {
  i2c: I,
  int: INT,
  config: Config,
}

impl<I, E, INT> Gsl1680<I, INT>
where
  I: I2c<SevenBitAddress, Error = E>,
  INT: Wait,
{
  /// Create a new driver instance with the provided peripherals and screen
  /// configuration.
  ///
  /// Nothing is transmitted to the device until [`Gsl1680::initialize`] is
  /// called. The configuration can be adjusted at any time through the
  /// setters; each report cycle reads it afresh.
  pub fn new(i2c: I, int: INT, config: Config) -> Self {
    Self { i2c, int, config }
  }

  /// Initialize the touchscreen controller.
  ///
  /// Runs the full bring-up: command and reset sequencing, the vendor
  /// firmware upload, and the final start, with the documented settling
  /// delays taken from the provided timer. A bus failure aborts the whole
  /// sequence; there is no usable partial-success state for a
  /// half-initialized panel, so simply retry from the start.
  pub async fn initialize(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<E>> {
    self.bring_up(delay).await
  }

  /// Screen extents used by the orientation remap.
  pub fn extents(&self) -> (u16, u16) {
    (self.config.width, self.config.height)
  }

  /// Update the screen extents. They must match the panel before a
  /// non-zero orientation is selected.
  pub fn set_extents(&mut self, width: u16, height: u16) {
    self.config.width = width;
    self.config.height = height;
  }

  /// Rotation currently applied to decoded coordinates.
  pub fn orientation(&self) -> Orientation {
    self.config.orientation
  }

  /// Change the rotation applied to decoded coordinates. Takes effect at
  /// the next report cycle.
  pub fn set_orientation(&mut self, orientation: Orientation) {
    self.config.orientation = orientation;
  }

  /// Release the underlying peripherals.
  pub fn release(self) -> (I, INT) {
    (self.i2c, self.int)
  }
}
