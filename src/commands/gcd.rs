use crate::core::numbers::gcd;

pub fn main_with_opts(a: u64, b: u64) -> anyhow::Result<()> {
    println!("{}", gcd(a, b));
    Ok(())
}
