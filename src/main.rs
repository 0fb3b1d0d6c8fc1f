// 界面单线程驱动，所有操作按顺序执行
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    bmi_tracker_lib::run().await
}
