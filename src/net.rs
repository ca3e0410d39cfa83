use std::time::Duration;

/// an example domain provided by IANA. plain http on purpose - the probe
/// only asks whether anything answers, and skipping tls keeps the client
/// dependency-light
const PROBE_URL: &str = "http://www.example.com";

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// true if an http request to the IANA example domain gets any response.
/// never errors - everything that can go wrong means offline
pub fn internet_available() -> bool {
    internet_available_at(PROBE_URL)
}

/// the same probe against a caller chosen url
pub fn internet_available_at(url: &str) -> bool {
    let client = match reqwest::blocking::Client::builder()
        .timeout(PROBE_TIMEOUT)
        .build()
    {
        Ok(client) => client,
        Err(err) => {
            tracing::debug!("connectivity probe client construction failed: {err}");
            return false;
        }
    };
    match client.get(url).send() {
        Ok(_) => true,
        Err(err) => {
            tracing::debug!("connectivity probe to {url} failed: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // only the failure paths run here. the happy path needs a reachable
    // network, which test environments don't reliably have

    #[test]
    fn malformed_url_is_offline() {
        assert!(!internet_available_at("not a url"));
    }

    #[test]
    fn unreachable_host_is_offline() {
        // port 1 on loopback refuses immediately
        assert!(!internet_available_at("http://127.0.0.1:1"));
    }
}
