use textgrid_core::error::TextgridError;
use textgrid_core::RecognitionResult;

pub fn print(result: &RecognitionResult) -> Result<(), TextgridError> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}
