use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use serverless_benchmarks::config::BenchmarkConfig;
use serverless_benchmarks::handler::CpuTestHandler;
use serverless_benchmarks::telemetry;

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init();

    // Defaults are read at cold start (once per container lifecycle)
    let handler = CpuTestHandler::new(&BenchmarkConfig::from_env());

    run(service_fn(move |event: LambdaEvent<Value>| {
        let response = handler.handle_event(event.payload);
        async move { Ok::<_, Error>(response) }
    }))
    .await
}
