mod detect;
mod r#move;
mod service;
mod solve;
mod state;

mod prelude;
use prelude::*;


fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    let service = Service::new(RandomDetector, KociembaCli::default());

    let mut args = std::env::args().skip(1);
    let response = match (args.next().as_deref(), args.next()) {
        (Some("solve"), Some(state)) => {
            serde_json::to_string(&service.solve(SolveRequest { state })?)?
        }
        (Some("detect"), image) => serde_json::to_string(&service.detect(DetectRequest {
            image: image.unwrap_or_default(),
        })?)?,
        _ => anyhow::bail!("usage: cubeserve solve <54-sticker state> | cubeserve detect <image data>"),
    };

    println!("{}", response);
    Ok(())
}
