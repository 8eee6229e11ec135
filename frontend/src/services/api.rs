use gloo::net::http::Request;
use shared::{Animal, AnimalSave, Cuidado, CuidadoSave};

/// API client for communicating with the zoo backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Fetch the full animal collection
    pub async fn list_animals(&self) -> Result<Vec<Animal>, String> {
        let url = format!("{}/animal", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Vec<Animal>>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse animals: {}", e)),
                    }
                } else {
                    let error_text = response.text().await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Failed to fetch animals: {}", e)),
        }
    }

    /// Create or update an animal, depending on the save decision
    pub async fn save_animal(&self, save: AnimalSave) -> Result<(), String> {
        match save {
            AnimalSave::Create(payload) => {
                let url = format!("{}/animal", self.base_url);

                match Request::post(&url)
                    .json(&payload)
                    .map_err(|e| format!("Failed to serialize request: {}", e))?
                    .send()
                    .await
                {
                    Ok(response) => {
                        if response.ok() {
                            Ok(())
                        } else {
                            let error_text = response.text().await
                                .unwrap_or_else(|_| "Unknown error".to_string());
                            Err(error_text)
                        }
                    }
                    Err(e) => Err(format!("Network error: {}", e)),
                }
            }
            AnimalSave::Update { id, payload } => {
                let url = format!("{}/animal/{}", self.base_url, id);

                match Request::put(&url)
                    .json(&payload)
                    .map_err(|e| format!("Failed to serialize request: {}", e))?
                    .send()
                    .await
                {
                    Ok(response) => {
                        if response.ok() {
                            Ok(())
                        } else {
                            let error_text = response.text().await
                                .unwrap_or_else(|_| "Unknown error".to_string());
                            Err(error_text)
                        }
                    }
                    Err(e) => Err(format!("Network error: {}", e)),
                }
            }
        }
    }

    /// Delete an animal by id
    pub async fn delete_animal(&self, id: &str) -> Result<(), String> {
        let url = format!("{}/animal/{}", self.base_url, id);

        match Request::delete(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    let error_text = response.text().await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Fetch the care records scoped to one animal
    pub async fn list_cuidados(&self, animal_id: &str) -> Result<Vec<Cuidado>, String> {
        let url = format!("{}/cuidados?animalId={}", self.base_url, animal_id);

        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Vec<Cuidado>>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse care records: {}", e)),
                    }
                } else {
                    let error_text = response.text().await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Failed to fetch care records: {}", e)),
        }
    }

    /// Create or update a care record, depending on the save decision
    pub async fn save_cuidado(&self, save: CuidadoSave) -> Result<(), String> {
        match save {
            CuidadoSave::Create(payload) => {
                let url = format!("{}/cuidados", self.base_url);

                match Request::post(&url)
                    .json(&payload)
                    .map_err(|e| format!("Failed to serialize request: {}", e))?
                    .send()
                    .await
                {
                    Ok(response) => {
                        if response.ok() {
                            Ok(())
                        } else {
                            let error_text = response.text().await
                                .unwrap_or_else(|_| "Unknown error".to_string());
                            Err(error_text)
                        }
                    }
                    Err(e) => Err(format!("Network error: {}", e)),
                }
            }
            CuidadoSave::Update { id, payload } => {
                let url = format!("{}/cuidados/{}", self.base_url, id);

                match Request::put(&url)
                    .json(&payload)
                    .map_err(|e| format!("Failed to serialize request: {}", e))?
                    .send()
                    .await
                {
                    Ok(response) => {
                        if response.ok() {
                            Ok(())
                        } else {
                            let error_text = response.text().await
                                .unwrap_or_else(|_| "Unknown error".to_string());
                            Err(error_text)
                        }
                    }
                    Err(e) => Err(format!("Network error: {}", e)),
                }
            }
        }
    }

    /// Delete a care record by id
    pub async fn delete_cuidado(&self, id: &str) -> Result<(), String> {
        let url = format!("{}/cuidados/{}", self.base_url, id);

        match Request::delete(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    let error_text = response.text().await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
