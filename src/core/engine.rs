use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct HarvestEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> HarvestEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load. Returns the output path.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting email extraction from CSV websites...");

        let table = self.pipeline.extract().await?;
        let result = self.pipeline.transform(table).await?;
        let output_path = self.pipeline.load(result).await?;

        tracing::info!("Completed! Results saved to: {}", output_path);
        Ok(output_path)
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }
}
