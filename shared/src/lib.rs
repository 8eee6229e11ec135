use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Animal record as the backend returns it (camelCase JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: String,
    pub nome: String,
    pub descricao: String,
    /// Calendar date kept as text (YYYY-MM-DD) until submission
    pub data_nascimento: String,
    pub especie: String,
    pub habitat: String,
    pub pais_origem: String,
}

/// Care record as the backend returns it (camelCase JSON).
///
/// `nome` is one of the fixed care-kind labels; `animal_id` is a weak
/// reference by id — deleting the animal leaves the record orphaned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cuidado {
    pub id: String,
    pub nome: String,
    pub descricao: String,
    pub frequencia: String,
    pub animal_id: String,
}

/// Fixed set of care types offered by the cuidado form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CareKind {
    Alimentacao,
    ExameVeterinario,
    Vacinacao,
    Treinamento,
}

impl CareKind {
    pub const ALL: [CareKind; 4] = [
        CareKind::Alimentacao,
        CareKind::ExameVeterinario,
        CareKind::Vacinacao,
        CareKind::Treinamento,
    ];

    /// Display label, also the value stored in `Cuidado::nome` on the wire.
    pub fn label(&self) -> &'static str {
        match self {
            CareKind::Alimentacao => "Alimentação",
            CareKind::ExameVeterinario => "Exame Veterinário",
            CareKind::Vacinacao => "Vacinação",
            CareKind::Treinamento => "Treinamento",
        }
    }

    /// Parse a stored label back into a care kind. Anything that does not
    /// match is treated as "not selected" (the empty option sentinel), not
    /// as a distinct error.
    pub fn from_label(label: &str) -> Option<CareKind> {
        CareKind::ALL.iter().copied().find(|k| k.label() == label)
    }
}

/// Per-field validation errors, keyed by the internal field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

/// Raw animal form fields, all text as the inputs hold them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimalFormData {
    pub nome: String,
    pub descricao: String,
    pub data_nascimento: String,
    pub especie: String,
    pub habitat: String,
    pub pais_origem: String,
}

impl From<&Animal> for AnimalFormData {
    fn from(animal: &Animal) -> Self {
        Self {
            nome: animal.nome.clone(),
            descricao: animal.descricao.clone(),
            data_nascimento: animal.data_nascimento.clone(),
            especie: animal.especie.clone(),
            habitat: animal.habitat.clone(),
            pais_origem: animal.pais_origem.clone(),
        }
    }
}

impl AnimalFormData {
    /// Validate the raw fields into a typed record, or report one message
    /// per offending field. All six fields are required; the birth date must
    /// also parse as a calendar date.
    pub fn validate(&self) -> Result<ValidatedAnimal, FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.nome.is_empty() {
            errors.insert("nome", "Nome obrigatório");
        }
        if self.descricao.is_empty() {
            errors.insert("descricao", "Descrição obrigatória");
        }
        let data_nascimento = if self.data_nascimento.is_empty() {
            errors.insert("data_nascimento", "Data obrigatória");
            None
        } else {
            match NaiveDate::parse_from_str(&self.data_nascimento, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.insert("data_nascimento", "Data inválida");
                    None
                }
            }
        };
        if self.especie.is_empty() {
            errors.insert("especie", "Espécie obrigatória");
        }
        if self.habitat.is_empty() {
            errors.insert("habitat", "Habitat obrigatório");
        }
        if self.pais_origem.is_empty() {
            errors.insert("pais_origem", "País obrigatório");
        }

        match (data_nascimento, errors.is_empty()) {
            (Some(data_nascimento), true) => Ok(ValidatedAnimal {
                nome: self.nome.clone(),
                descricao: self.descricao.clone(),
                data_nascimento,
                especie: self.especie.clone(),
                habitat: self.habitat.clone(),
                pais_origem: self.pais_origem.clone(),
            }),
            _ => Err(errors),
        }
    }
}

/// Animal form data after validation, with the birth date converted to a
/// real date value.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedAnimal {
    pub nome: String,
    pub descricao: String,
    pub data_nascimento: NaiveDate,
    pub especie: String,
    pub habitat: String,
    pub pais_origem: String,
}

impl ValidatedAnimal {
    /// Choose create vs update from the record being edited (if any) and
    /// build the matching wire payload.
    pub fn save_for(self, editing: Option<&Animal>) -> AnimalSave {
        match editing {
            Some(animal) => AnimalSave::Update {
                id: animal.id.clone(),
                payload: self.into_payload(Some(animal.id.clone())),
            },
            None => AnimalSave::Create(self.into_payload(None)),
        }
    }

    fn into_payload(self, id: Option<String>) -> AnimalPayload {
        AnimalPayload {
            id,
            nome: self.nome,
            descricao: self.descricao,
            data_nascimento: self.data_nascimento,
            especie: self.especie,
            habitat: self.habitat,
            pais_origem: self.pais_origem,
        }
    }
}

/// Raw cuidado form fields. `animal_id` is pre-filled from the selected
/// animal in create mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CuidadoFormData {
    pub nome: String,
    pub descricao: String,
    pub frequencia: String,
    pub animal_id: String,
}

impl From<&Cuidado> for CuidadoFormData {
    fn from(cuidado: &Cuidado) -> Self {
        Self {
            nome: cuidado.nome.clone(),
            descricao: cuidado.descricao.clone(),
            frequencia: cuidado.frequencia.clone(),
            animal_id: cuidado.animal_id.clone(),
        }
    }
}

impl CuidadoFormData {
    /// Validate against the currently loaded animals: every field required,
    /// `nome` must be one of the fixed care kinds and `animal_id` must
    /// reference a loaded animal.
    pub fn validate(&self, animais: &[Animal]) -> Result<ValidatedCuidado, FieldErrors> {
        let mut errors = FieldErrors::new();

        let nome = match CareKind::from_label(&self.nome) {
            Some(kind) => Some(kind),
            None => {
                errors.insert("nome", "Selecione o cuidado");
                None
            }
        };
        if self.descricao.is_empty() {
            errors.insert("descricao", "Descrição obrigatória");
        }
        if self.frequencia.is_empty() {
            errors.insert("frequencia", "Frequência obrigatória");
        }
        if !animais.iter().any(|a| a.id == self.animal_id) {
            errors.insert("animal_id", "Selecione um animal");
        }

        match (nome, errors.is_empty()) {
            (Some(nome), true) => Ok(ValidatedCuidado {
                nome,
                descricao: self.descricao.clone(),
                frequencia: self.frequencia.clone(),
                animal_id: self.animal_id.clone(),
            }),
            _ => Err(errors),
        }
    }
}

/// Cuidado form data after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedCuidado {
    pub nome: CareKind,
    pub descricao: String,
    pub frequencia: String,
    pub animal_id: String,
}

impl ValidatedCuidado {
    /// Choose create vs update from the record being edited (if any).
    /// Updates keep the record's original scope: the update payload type has
    /// no animal id at all.
    pub fn save_for(self, editing: Option<&Cuidado>) -> CuidadoSave {
        match editing {
            Some(cuidado) => CuidadoSave::Update {
                id: cuidado.id.clone(),
                payload: UpdateCuidadoPayload {
                    id: cuidado.id.clone(),
                    nome: self.nome.label().to_string(),
                    descricao: self.descricao,
                    frequencia: self.frequencia,
                },
            },
            None => CuidadoSave::Create(CreateCuidadoPayload {
                nome: self.nome.label().to_string(),
                descricao: self.descricao,
                frequencia: self.frequencia,
                animal_id: self.animal_id,
            }),
        }
    }
}

/// Wire payload for creating or updating an animal. The backend expects
/// PascalCase field names and a real date value; `Id` is only sent on
/// updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnimalPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub nome: String,
    pub descricao: String,
    pub data_nascimento: NaiveDate,
    pub especie: String,
    pub habitat: String,
    pub pais_origem: String,
}

/// Wire payload for creating a cuidado, scoped to an animal at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCuidadoPayload {
    pub nome: String,
    pub descricao: String,
    pub frequencia: String,
    pub animal_id: String,
}

/// Wire payload for updating a cuidado. The animal reference is immutable
/// after creation, so this shape carries no `AnimalId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateCuidadoPayload {
    pub id: String,
    pub nome: String,
    pub descricao: String,
    pub frequencia: String,
}

/// Create-vs-update decision for an animal submission.
#[derive(Debug, Clone, PartialEq)]
pub enum AnimalSave {
    Create(AnimalPayload),
    Update { id: String, payload: AnimalPayload },
}

/// Create-vs-update decision for a cuidado submission.
#[derive(Debug, Clone, PartialEq)]
pub enum CuidadoSave {
    Create(CreateCuidadoPayload),
    Update { id: String, payload: UpdateCuidadoPayload },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_animal() -> Animal {
        Animal {
            id: "1".to_string(),
            nome: "Leão".to_string(),
            descricao: "Leão africano".to_string(),
            data_nascimento: "2018-03-21".to_string(),
            especie: "Panthera leo".to_string(),
            habitat: "Savana".to_string(),
            pais_origem: "Quênia".to_string(),
        }
    }

    fn sample_cuidado() -> Cuidado {
        Cuidado {
            id: "10".to_string(),
            nome: "Vacinação".to_string(),
            descricao: "Raiva".to_string(),
            frequencia: "anual".to_string(),
            animal_id: "1".to_string(),
        }
    }

    fn valid_animal_form() -> AnimalFormData {
        AnimalFormData::from(&sample_animal())
    }

    #[test]
    fn test_animal_validation_passes_and_converts_date() {
        let validated = valid_animal_form().validate().unwrap();
        assert_eq!(validated.nome, "Leão");
        assert_eq!(
            validated.data_nascimento,
            NaiveDate::from_ymd_opt(2018, 3, 21).unwrap()
        );
    }

    #[test]
    fn test_animal_each_empty_field_reports_exactly_that_field() {
        let cases = [
            ("nome", "Nome obrigatório"),
            ("descricao", "Descrição obrigatória"),
            ("data_nascimento", "Data obrigatória"),
            ("especie", "Espécie obrigatória"),
            ("habitat", "Habitat obrigatório"),
            ("pais_origem", "País obrigatório"),
        ];

        for (field, message) in cases {
            let mut form = valid_animal_form();
            match field {
                "nome" => form.nome.clear(),
                "descricao" => form.descricao.clear(),
                "data_nascimento" => form.data_nascimento.clear(),
                "especie" => form.especie.clear(),
                "habitat" => form.habitat.clear(),
                "pais_origem" => form.pais_origem.clear(),
                _ => unreachable!(),
            }

            let errors = form.validate().unwrap_err();
            assert_eq!(errors.len(), 1, "only {} should fail", field);
            assert_eq!(errors.get(field), Some(message));
        }
    }

    #[test]
    fn test_animal_unparseable_date_is_rejected() {
        let mut form = valid_animal_form();
        form.data_nascimento = "21/03/2018".to_string();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("data_nascimento"), Some("Data inválida"));
    }

    #[test]
    fn test_animal_create_payload_has_no_id_key() {
        let save = valid_animal_form().validate().unwrap().save_for(None);

        let payload = match save {
            AnimalSave::Create(payload) => payload,
            AnimalSave::Update { .. } => panic!("expected create without an editing record"),
        };

        let json = serde_json::to_value(&payload).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("Id"));
        assert_eq!(object["Nome"], "Leão");
        assert_eq!(object["Descricao"], "Leão africano");
        assert_eq!(object["DataNascimento"], "2018-03-21");
        assert_eq!(object["Especie"], "Panthera leo");
        assert_eq!(object["Habitat"], "Savana");
        assert_eq!(object["PaisOrigem"], "Quênia");
    }

    #[test]
    fn test_animal_update_carries_editing_id() {
        let animal = sample_animal();
        let save = valid_animal_form().validate().unwrap().save_for(Some(&animal));

        match save {
            AnimalSave::Update { id, payload } => {
                assert_eq!(id, "1");
                assert_eq!(payload.id.as_deref(), Some("1"));
                let json = serde_json::to_value(&payload).unwrap();
                assert_eq!(json["Id"], "1");
            }
            AnimalSave::Create(_) => panic!("expected update with an editing record"),
        }
    }

    #[test]
    fn test_animal_model_deserializes_camel_case() {
        let animal: Animal = serde_json::from_str(
            r#"{
                "id": "7",
                "nome": "Arara",
                "descricao": "Arara-azul",
                "dataNascimento": "2020-01-05",
                "especie": "Anodorhynchus hyacinthinus",
                "habitat": "Floresta",
                "paisOrigem": "Brasil"
            }"#,
        )
        .unwrap();

        assert_eq!(animal.data_nascimento, "2020-01-05");
        assert_eq!(animal.pais_origem, "Brasil");
    }

    #[test]
    fn test_cuidado_model_deserializes_camel_case() {
        let cuidado: Cuidado = serde_json::from_str(
            r#"{
                "id": "10",
                "nome": "Vacinação",
                "descricao": "Raiva",
                "frequencia": "anual",
                "animalId": "1"
            }"#,
        )
        .unwrap();

        assert_eq!(cuidado.animal_id, "1");
    }

    #[test]
    fn test_form_prefill_matches_source_records() {
        let animal = sample_animal();
        let form = AnimalFormData::from(&animal);
        assert_eq!(form.nome, animal.nome);
        assert_eq!(form.descricao, animal.descricao);
        assert_eq!(form.data_nascimento, animal.data_nascimento);
        assert_eq!(form.especie, animal.especie);
        assert_eq!(form.habitat, animal.habitat);
        assert_eq!(form.pais_origem, animal.pais_origem);

        let cuidado = sample_cuidado();
        let form = CuidadoFormData::from(&cuidado);
        assert_eq!(form.nome, cuidado.nome);
        assert_eq!(form.descricao, cuidado.descricao);
        assert_eq!(form.frequencia, cuidado.frequencia);
        assert_eq!(form.animal_id, cuidado.animal_id);
    }

    #[test]
    fn test_care_kind_labels_round_trip() {
        for kind in CareKind::ALL {
            assert_eq!(CareKind::from_label(kind.label()), Some(kind));
        }
        assert_eq!(CareKind::from_label(""), None);
        assert_eq!(CareKind::from_label("Banho"), None);
    }

    #[test]
    fn test_cuidado_unknown_nome_reports_nome() {
        let form = CuidadoFormData {
            nome: "Banho".to_string(),
            descricao: "Raiva".to_string(),
            frequencia: "anual".to_string(),
            animal_id: "1".to_string(),
        };

        let errors = form.validate(&[sample_animal()]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("nome"), Some("Selecione o cuidado"));
    }

    #[test]
    fn test_cuidado_each_empty_field_reports_exactly_that_field() {
        let animais = [sample_animal()];
        let valid = CuidadoFormData::from(&sample_cuidado());

        let mut form = valid.clone();
        form.nome.clear();
        let errors = form.validate(&animais).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("nome"), Some("Selecione o cuidado"));

        let mut form = valid.clone();
        form.descricao.clear();
        let errors = form.validate(&animais).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("descricao"), Some("Descrição obrigatória"));

        let mut form = valid.clone();
        form.frequencia.clear();
        let errors = form.validate(&animais).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("frequencia"), Some("Frequência obrigatória"));

        let mut form = valid;
        form.animal_id.clear();
        let errors = form.validate(&animais).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("animal_id"), Some("Selecione um animal"));
    }

    #[test]
    fn test_cuidado_animal_id_must_be_loaded() {
        let form = CuidadoFormData {
            nome: "Vacinação".to_string(),
            descricao: "Raiva".to_string(),
            frequencia: "anual".to_string(),
            animal_id: "99".to_string(),
        };

        let errors = form.validate(&[sample_animal()]).unwrap_err();
        assert_eq!(errors.get("animal_id"), Some("Selecione um animal"));
    }

    #[test]
    fn test_cuidado_create_payload_carries_animal_id() {
        let form = CuidadoFormData {
            nome: "Vacinação".to_string(),
            descricao: "Raiva".to_string(),
            frequencia: "anual".to_string(),
            animal_id: "1".to_string(),
        };

        let save = form.validate(&[sample_animal()]).unwrap().save_for(None);
        let payload = match save {
            CuidadoSave::Create(payload) => payload,
            CuidadoSave::Update { .. } => panic!("expected create without an editing record"),
        };

        let json = serde_json::to_value(&payload).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object["AnimalId"], "1");
        assert_eq!(object["Nome"], "Vacinação");
        assert_eq!(object["Descricao"], "Raiva");
        assert_eq!(object["Frequencia"], "anual");
        assert!(!object.contains_key("Id"));
    }

    #[test]
    fn test_cuidado_update_payload_never_includes_animal_id() {
        // Editing record scoped to animal "1" while the form selection moved
        // to animal "2": the update keeps the original scope by omitting the
        // animal reference entirely.
        let editing = sample_cuidado();
        let other = Animal {
            id: "2".to_string(),
            ..sample_animal()
        };
        let form = CuidadoFormData {
            nome: "Treinamento".to_string(),
            descricao: "Comandos básicos".to_string(),
            frequencia: "semanal".to_string(),
            animal_id: "2".to_string(),
        };

        let save = form
            .validate(&[sample_animal(), other])
            .unwrap()
            .save_for(Some(&editing));

        match save {
            CuidadoSave::Update { id, payload } => {
                assert_eq!(id, "10");
                let json = serde_json::to_value(&payload).unwrap();
                let object = json.as_object().unwrap();
                assert!(!object.contains_key("AnimalId"));
                assert!(!object.contains_key("animalId"));
                assert_eq!(object["Id"], "10");
                assert_eq!(object["Nome"], "Treinamento");
            }
            CuidadoSave::Create(_) => panic!("expected update with an editing record"),
        }
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = AnimalFormData::default().validate().unwrap_err();
        assert_eq!(errors.len(), 6);

        let errors = CuidadoFormData::default().validate(&[]).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
