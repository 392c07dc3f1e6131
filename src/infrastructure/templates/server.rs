//! Boilerplate source emitted into generated projects. The same code is
//! written for both language variants; only the file names change.

pub fn entry_point() -> String {
    r#"import http from 'http';
import app from './src/app.js';
import envConfig from './src/config/envConfig.js';

const server = http.createServer(app);

const startServer = async () => {
  server.listen(envConfig.port, () => {
    console.log(`Server is running on http://localhost:${envConfig.port}`);
  });
};

startServer();
"#
    .to_string()
}

/// Application wiring. Outside development the full hardening stack is
/// installed; development keeps the minimal set.
pub fn app_module() -> String {
    r#"import compression from 'compression';
import cookieParser from 'cookie-parser';
import cors from 'cors';
import express from 'express';
import ExpressMongoSanitize from 'express-mongo-sanitize';
import rateLimit from 'express-rate-limit';
import helmet from 'helmet';
import hpp from 'hpp';
import morgan from 'morgan';
import envConfig from './config/envConfig.js';

const app = express();

if (envConfig.nodeEnv !== 'development') {
  app.use(helmet());
  app.use(cors({ origin: 'http://localhost:3000', credentials: true }));
  app.use(morgan('combined'));
  app.use(express.json());
  app.use(express.urlencoded({ extended: true }));
  app.use(cookieParser());
  app.use(hpp());
  app.use(compression());
  app.use(ExpressMongoSanitize());
  app.use(
    rateLimit({
      windowMs: 15 * 60 * 1000,
      max: 100,
    })
  );
} else {
  app.use(cors({ origin: 'http://localhost:3000', credentials: true }));
  app.use(morgan('dev'));
  app.use(express.json());
  app.use(express.urlencoded({ extended: true }));
  app.use(cookieParser());
}

app.get('/', (req, res) => {
  res.send('Server is running 🚀');
});

export default app;
"#
    .to_string()
}

pub fn env_config() -> String {
    r#"import 'dotenv/config';

const _config = {
  port: process.env.PORT || 3000,
  nodeEnv: process.env.NODE_ENV || 'development',
};

const envConfig = Object.freeze(_config);
export default envConfig;
"#
    .to_string()
}
