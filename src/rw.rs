use embedded_hal_async::digital::Wait;
use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::reg::I2C_ADDR;
use crate::{Error, Gsl1680};

impl<I, E, INT> Gsl1680<I, INT>
where
  I: I2c<SevenBitAddress, Error = E>,
  INT: Wait,
{
  pub(crate) async fn write_u8(&mut self, reg: impl Into<u8>, value: u8) -> Result<(), Error<E>> {
    let buf = [reg.into(), value];
    self.i2c.write(I2C_ADDR, &buf).await.map_err(Error::I2c)
  }

  /// Write a 32-bit word in little-endian byte order, prefixed with the
  /// register address. This is the transfer shape the firmware loader
  /// replays a few thousand times.
  pub(crate) async fn write_u32(&mut self, reg: impl Into<u8>, value: u32) -> Result<(), Error<E>> {
    let v = value.to_le_bytes();
    let buf = [reg.into(), v[0], v[1], v[2], v[3]];
    self.i2c.write(I2C_ADDR, &buf).await.map_err(Error::I2c)
  }

  pub(crate) async fn read_u8(&mut self, reg: impl Into<u8>) -> Result<u8, Error<E>> {
    let mut buf = [0u8; 1];
    self.read_bytes(reg, &mut buf).await?;
    Ok(buf[0])
  }

  pub(crate) async fn read_bytes(&mut self, reg: impl Into<u8>, buf: &mut [u8]) -> Result<(), Error<E>> {
    let addr = [reg.into()];
    self.i2c.write_read(I2C_ADDR, &addr, buf).await.map_err(Error::I2c)
  }
}
