//! Fixtures shared by the service tests.

use chrono::NaiveDate;

use avalia_core::config::AuthConfig;
use avalia_database::Repositories;
use avalia_entity::{
    CycleStatus, EvaluationType, NewBehavioralEvaluation, NewCycle, NewDeliverablesEvaluation,
    NewEmployee, NewGoal,
};

use crate::employee::EmployeeService;

pub(crate) fn employee_service() -> (EmployeeService, Repositories) {
    let repos = Repositories::memory();
    let service = EmployeeService::new(repos.employees.clone(), &AuthConfig::default());
    (service, repos)
}

pub(crate) fn new_employee(matricula: &str, gestor: Option<&str>) -> NewEmployee {
    NewEmployee {
        matricula: matricula.to_string(),
        nome: format!("Colaborador {matricula}"),
        email: format!("{}@empresa.com", matricula.to_lowercase()),
        senha: "segredo1".to_string(),
        cargo: "Analista".to_string(),
        departamento: "TI".to_string(),
        gestor_matricula: gestor.map(str::to_string),
    }
}

pub(crate) fn new_cycle(ano: i32) -> NewCycle {
    NewCycle {
        ano,
        descricao: Some(format!("Ciclo {ano}")),
        data_inicio: NaiveDate::from_ymd_opt(ano, 1, 1).unwrap(),
        data_fim: NaiveDate::from_ymd_opt(ano, 12, 31).unwrap(),
        status: CycleStatus::EmAndamento,
    }
}

pub(crate) fn new_behavioral(
    ciclo_id: i32,
    avaliado: &str,
    avaliador: &str,
    scores: [i32; 5],
) -> NewBehavioralEvaluation {
    NewBehavioralEvaluation {
        ciclo_id,
        avaliado_matricula: avaliado.to_string(),
        avaliador_matricula: avaliador.to_string(),
        tipo_avaliacao: EvaluationType::AvaliacaoGestor,
        lideranca: scores[0],
        comunicacao: scores[1],
        trabalho_equipe: scores[2],
        resolucao_problemas: scores[3],
        adaptabilidade: scores[4],
        comentarios: None,
    }
}

pub(crate) fn new_deliverables(
    ciclo_id: i32,
    avaliado: &str,
    avaliador: &str,
    scores: [i32; 5],
) -> NewDeliverablesEvaluation {
    NewDeliverablesEvaluation {
        ciclo_id,
        avaliado_matricula: avaliado.to_string(),
        avaliador_matricula: avaliador.to_string(),
        qualidade: scores[0],
        prazo: scores[1],
        produtividade: scores[2],
        impacto: scores[3],
        inovacao: scores[4],
        comentarios: None,
    }
}

pub(crate) fn new_goal(ciclo_id: i32, colaborador: &str, titulo: &str) -> NewGoal {
    NewGoal {
        ciclo_id,
        colaborador_matricula: colaborador.to_string(),
        titulo: titulo.to_string(),
        descricao: None,
        peso: 50,
        data_limite: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
    }
}

/// Store with employees `G001` (manager) and `C001`, `C002` reporting to it,
/// plus one in-progress cycle for 2025.
pub(crate) async fn populated() -> (Repositories, i32) {
    let (service, repos) = employee_service();
    service.create(new_employee("G001", None)).await.unwrap();
    service.create(new_employee("C001", Some("G001"))).await.unwrap();
    service.create(new_employee("C002", Some("G001"))).await.unwrap();
    let cycle = repos.cycles.create(new_cycle(2025)).await.unwrap();
    (repos, cycle.id)
}
