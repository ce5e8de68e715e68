use std::env;

/// Export `name` to the crate as a `rustc-env` value, or `default` if unset
fn export(name: &str, default: &str, secret: bool) {
    match env::var(name) {
        Ok(value) => {
            println!("cargo:rustc-env={}={}", name, value);
            if secret {
                println!("cargo:warning=Using {} from environment (hidden)", name);
            } else {
                println!("cargo:warning=Using {} from environment: {}", name, value);
            }
        }
        Err(_) => println!("cargo:rustc-env={}={}", name, default),
    }
    println!("cargo:rerun-if-env-changed={}", name);
}

fn main() {
    // Network credentials (empty SSID disables the network channel)
    export("WIFI_SSID", "", false);
    export("WIFI_PASSWORD", "", true);

    // Broker endpoint
    export("MQTT_BROKER", "", false);
    export("MQTT_PORT", "1883", false);

    // Transmission mode: local, network or both
    export("TX_MODE", "local", false);

    // Calibration gravity handling: subtract or raw
    export("GRAVITY", "subtract", false);
}
