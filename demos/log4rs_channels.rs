use std::error::Error;

use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use typed_logger::{
    channel_log, channel_log_if, env_config, BuildChannels, Channels, Hex, LogFacadeSink,
    Scientific,
};

const LOG_FILE: &str = "channels.log";

fn init_log4rs() -> Result<(), Box<dyn Error>> {
    let trigger = Box::new(SizeTrigger::new(4 * 1024 * 1024)); // 4MB
    let roller = Box::new(FixedWindowRoller::builder().build("channels.{}.log", 5)?);
    let policy = Box::new(CompoundPolicy::new(trigger, roller));

    let file = RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} - {l} - {t} - {m}{n}",
        )))
        .build(LOG_FILE, policy)?;
    let console = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{h({l})} {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file)))
        .appender(Appender::builder().build("console", Box::new(console)))
        .build(
            Root::builder()
                .appender("file")
                .appender("console")
                .build(LevelFilter::Debug),
        )?;

    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    init_log4rs()?;

    let sink = LogFacadeSink::new("demo");
    let mut log: BuildChannels = Channels::new(&sink);
    // TYPED_LOG_LEVEL / TYPED_LOG_DISABLE
    log.apply_config(env_config());

    log.info.call("starting {} workers", (4u32,));
    log.debug.call("debug channel compiled in: {}", (log.debug.is_build_enabled(),));

    for worker in 0..4u32 {
        let load = 0.25 * f64::from(worker);
        channel_log!(log.verbose, "worker {} load={:.2}", worker, load);
        if load > 0.6 {
            log.warning.call(
                "worker {} above threshold, mask={:#}",
                (worker, Hex(1u32 << worker)),
            );
        }
    }

    channel_log_if!(
        cfg!(target_pointer_width = "64"),
        log.info,
        "rate={}",
        Scientific(123456.0f64)
    );
    log.error.call("{} of {} requests failed", (2u64, 1000u64));

    log::logger().flush();
    println!("Done. See {LOG_FILE} for the file output.");
    Ok(())
}
