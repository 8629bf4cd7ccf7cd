use anyhow::Result;
use objlib_core::hash_str;

pub fn run(strings: &[String]) -> Result<()> {
    for s in strings {
        println!("{:x}  {}", hash_str(s), s);
    }
    Ok(())
}
