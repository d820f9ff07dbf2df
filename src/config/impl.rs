use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// 加载配置，可指定主配置文件（默认 `config.*`，可缺省）
    pub fn load_from(config_file: Option<&str>) -> Result<Self, ConfigError> {
        let main_file = match config_file {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name("config").required(false),
        };

        let mut builder = Config::builder()
            // 内置默认值，保证没有配置文件时也能运行
            .add_source(Config::try_from(&AppConfig::default())?)
            // 然后加载默认配置文件
            .add_source(main_file)
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("APRENDA")
                    .separator("_")
                    .try_parsing(true),
            );

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option(
                "api.base_url",
                std::env::var("API_URL")
                    .or_else(|_| std::env::var("NEXT_PUBLIC_API_URL"))
                    .ok(),
            )?
            .set_override_option("session.path", std::env::var("AUTH_TOKEN_PATH").ok())?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;
        app_config.normalize();

        Ok(app_config)
    }

    /// 规整加载后的配置
    pub(crate) fn normalize(&mut self) {
        // 统一去掉结尾斜杠，请求路径总是以 / 开头
        while self.api.base_url.ends_with('/') {
            self.api.base_url.pop();
        }

        // 生产环境下 cookie 只允许 https
        if self.is_production() {
            self.session.secure = true;
        }
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        Self::init_from(None)
    }

    pub fn init_from(config_file: Option<&str>) -> Result<(), ConfigError> {
        let config = Self::load_from(config_file)?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }
}
