//! Fan-out example: several consumers subscribed to the same touch stream.
#![allow(unused)]
use embedded_hal_async::{
  delay::DelayNs,
  digital::Wait,
  i2c::{I2c, SevenBitAddress},
};
use gsl1680::{Config, Gsl1680, Point, Touchscreen};

#[allow(dead_code)]
async fn main_async<I2C, INT, D, E>(i2c: I2C, int: INT, mut delay: D) -> Result<(), gsl1680::Error<E>>
where
  I2C: I2c<SevenBitAddress, Error = E>,
  INT: Wait,
  D: DelayNs,
{
  let mut touch = Gsl1680::new(i2c, int, Config::default());
  touch.initialize(&mut delay).await?;

  let cursor = |point: Point| {
    let _ = point;
    // move the cursor layer
  };
  let overlay = |point: Point| {
    let _ = point;
    // paint a debug marker
  };

  let mut screen = Touchscreen::new(touch);
  screen.on_touch(&cursor)?;
  screen.on_touch(&overlay)?;
  screen.run().await
}

fn main() {}
