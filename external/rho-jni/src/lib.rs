//! JNI bridge for hosting the rho engine inside a JVM.
//!
//! The Java side hands over its colour and a pair of stream objects; the
//! whole match then runs on this side of the boundary, using the same
//! protocol loop as the CLI. `readLine`/`println` calls on the Java
//! objects are wrapped as a `LineIo` transport.

use jni::objects::{JClass, JObject, JString, JValue};
use jni::JNIEnv;
use std::io;
use tracing::{error, info};

use rho_agent::Agent;
use rho_board::Colour;
use rho_game::{run_match, LineIo};

const DEFAULT_DEPTH: u32 = 4;

fn to_io_error(e: jni::errors::Error) -> io::Error {
    io::Error::new(io::ErrorKind::Other, e.to_string())
}

/// `LineIo` over a Java `BufferedReader`-alike and `PrintStream`-alike.
struct JavaLineIo<'local, 'obj> {
    env: &'obj mut JNIEnv<'local>,
    input: &'obj JObject<'local>,
    output: &'obj JObject<'local>,
}

impl LineIo for JavaLineIo<'_, '_> {
    fn recv(&mut self) -> io::Result<String> {
        let value = self
            .env
            .call_method(self.input, "readLine", "()Ljava/lang/String;", &[])
            .and_then(|v| v.l())
            .map_err(to_io_error)?;

        if value.as_raw().is_null() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "readLine returned null",
            ));
        }

        let text = JString::from(value);
        let line: String = self.env.get_string(&text).map_err(to_io_error)?.into();
        Ok(line)
    }

    fn send(&mut self, line: &str) -> io::Result<()> {
        let text = self.env.new_string(line).map_err(to_io_error)?;
        self.env
            .call_method(
                self.output,
                "println",
                "(Ljava/lang/String;)V",
                &[JValue::Object(&text)],
            )
            .map_err(to_io_error)?;
        Ok(())
    }
}

#[no_mangle]
pub extern "system" fn Java_pawnrace_PawnRace_play(
    mut env: JNIEnv,
    _class: JClass,
    colour: JString,
    output: JObject,
    input: JObject,
) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let colour_str: String = match env.get_string(&colour) {
        Ok(s) => s.into(),
        Err(e) => {
            error!("Failed to convert colour from JString: {}", e);
            return;
        }
    };

    let colour: Colour = match colour_str.trim().parse() {
        Ok(c) => c,
        Err(e) => {
            error!("Unrecognised colour {:?}: {}", colour_str, e);
            return;
        }
    };

    let depth = std::env::var("RHO_DEPTH")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_DEPTH);

    let mut picker = Agent::new(depth);
    let mut line_io = JavaLineIo {
        env: &mut env,
        input: &input,
        output: &output,
    };

    info!("Playing {} at depth {}", colour, depth);
    match run_match(&mut line_io, &mut picker, colour) {
        Ok(outcome) => info!("Match finished: {}", outcome),
        Err(e) => error!("Match failed: {}", e),
    }
}
