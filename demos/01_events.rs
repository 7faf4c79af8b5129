//! Bring-up and event loop: initialize the controller, then await touches.
#![allow(unused)]
use embedded_hal_async::{
  delay::DelayNs,
  digital::Wait,
  i2c::{I2c, SevenBitAddress},
};
use gsl1680::{Config, Gsl1680, Orientation};

#[allow(dead_code)]
async fn main_async<I2C, INT, D, E>(i2c: I2C, int: INT, mut delay: D) -> Result<(), gsl1680::Error<E>>
where
  I2C: I2c<SevenBitAddress, Error = E>,
  INT: Wait,
  D: DelayNs,
{
  let config = Config::default().with_extents(480, 272).with_orientation(Orientation::Deg180);
  let mut touch = Gsl1680::new(i2c, int, config);
  touch.initialize(&mut delay).await?;

  loop {
    let touches = touch.next_touches().await?;
    for point in touches.iter() {
      let _ = point;
      // draw, hit-test, ...
    }
  }
}

fn main() {}
