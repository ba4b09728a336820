//! Lab status API client.

use enumset::EnumSet;
use reqwest::Url;
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    api::client,
    desktop::{self, Desktop},
    prelude::*,
    schedule::{Schedule, TimeRange},
};

pub struct Api {
    client: reqwest::Client,
    base_url: Url,
}

impl Api {
    #[instrument(skip_all, fields(base_url = %base_url))]
    pub fn new(base_url: Url) -> Result<Self> {
        Ok(Self { client: client::try_new()?, base_url })
    }

    #[instrument(skip_all)]
    pub async fn get_desktops_in_use(&self) -> Result<EnumSet<Desktop>> {
        let response: DesktopsResponse = self.get("lab/desktops").await?;
        let desktops = response.desktops();
        debug!(n_in_use = desktops.len(), "fetched the desktops");
        Ok(desktops)
    }

    #[instrument(skip_all)]
    pub async fn get_hours_today(&self) -> Result<Schedule> {
        let response: HoursResponse = self.get("hours/today").await?;
        let schedule = Schedule::from(response);
        info!(?schedule, "fetched today's hours");
        Ok(schedule)
    }

    async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let url = self
            .base_url
            .join(path)
            .with_context(|| format!("failed to build the URL for `{path}`"))?;
        self.client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("failed to request `{url}`"))?
            .error_for_status()?
            .json()
            .await
            .with_context(|| format!("failed to deserialize the response from `{url}`"))
    }
}

#[derive(Deserialize)]
struct DesktopsResponse {
    public_desktops_in_use: Vec<String>,
}

impl DesktopsResponse {
    fn desktops(&self) -> EnumSet<Desktop> {
        desktop::parse_known(self.public_desktops_in_use.iter().map(String::as_str))
    }
}

/// Opening hours, `null` entries stand for closed slots.
#[derive(Deserialize)]
struct HoursResponse(Vec<Option<TimeRange>>);

impl From<HoursResponse> for Schedule {
    fn from(response: HoursResponse) -> Self {
        response.0.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Time;

    #[test]
    fn deserialize_desktops_ok() -> Result {
        // language=json
        let body = r#"{
            "public_desktops_in_use": ["acid", "chaos", "tsunami"],
            "staff_desktops_in_use": ["supernova"]
        }"#;
        let response: DesktopsResponse = serde_json::from_str(body)?;
        assert_eq!(response.desktops(), Desktop::Acid | Desktop::Chaos);
        Ok(())
    }

    #[test]
    fn deserialize_hours_ok() -> Result {
        // language=json
        let body = r#"[["9:00:00", "18:00:00"]]"#;
        let schedule = Schedule::from(serde_json::from_str::<HoursResponse>(body)?);
        assert_eq!(
            schedule.ranges(),
            [TimeRange::new(Time::from_hms(9, 0, 0), Time::from_hms(18, 0, 0))],
        );
        Ok(())
    }

    #[test]
    fn deserialize_split_hours_ok() -> Result {
        // language=json
        let body = r#"[["9:00", "12:00"], null, ["13", "23:59:59"]]"#;
        let schedule = Schedule::from(serde_json::from_str::<HoursResponse>(body)?);
        assert_eq!(schedule.ranges().len(), 2);
        assert!(schedule.is_open(Time::from_hms(23, 0, 0)));
        assert!(!schedule.is_open(Time::from_hms(12, 30, 0)));
        Ok(())
    }

    #[test]
    fn deserialize_closed_all_day_ok() -> Result {
        let schedule = Schedule::from(serde_json::from_str::<HoursResponse>("[null]")?);
        assert!(schedule.is_closed_all_day());
        let schedule = Schedule::from(serde_json::from_str::<HoursResponse>("[]")?);
        assert!(schedule.is_closed_all_day());
        Ok(())
    }

    #[test]
    fn deserialize_malformed_hours_fails() {
        assert!(serde_json::from_str::<HoursResponse>(r#"[["nine", "18:00"]]"#).is_err());
    }

    #[tokio::test]
    #[ignore = "online test"]
    async fn get_hours_today_ok() -> Result {
        let api = Api::new("https://www.ocf.berkeley.edu/api/".parse()?)?;
        let _ = api.get_hours_today().await?;
        Ok(())
    }

    #[tokio::test]
    #[ignore = "online test"]
    async fn get_desktops_in_use_ok() -> Result {
        let api = Api::new("https://www.ocf.berkeley.edu/api/".parse()?)?;
        let _ = api.get_desktops_in_use().await?;
        Ok(())
    }
}
