use colorway::{Color, Hex, Ral, Space, DEFAULT_PRECISION};

pub fn main() -> colorway::Result<()> {
    // Mountain meadow.
    let hex = Hex::new("#11c380")?;

    // 17, 195, 128
    let rgb = hex.to_rgb();

    // 157, 0.8396, 0.4157
    let hsl = rgb.to_hsl(DEFAULT_PRECISION);

    // 157, 0.9128, 0.7647
    let hsv = rgb.to_hsv(DEFAULT_PRECISION);

    println!("{hex} = {rgb} = {hsl:?} = {hsv:?}");
    println!("brightened: {}", hsl.brighten(20.0).to_hex()?);

    let ral = Ral::find_closest(&hex)?;
    if let Some(ral) = ral {
        println!("closest RAL color: {ral} ({})", ral.to_hex()?);
    }

    let gray = Color::from(Hex::new("#333")?);
    dbg!(gray.to_space(Space::Ral, DEFAULT_PRECISION)?);

    Ok(())
}
