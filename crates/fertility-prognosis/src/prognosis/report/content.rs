use super::views::FindingKey;

/// Static clinical text attached to a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ClinicalContent {
    pub title: &'static str,
    pub definition: &'static str,
    pub justification: &'static str,
    pub recommendations: &'static [&'static str],
}

pub(crate) fn clinical_content(key: FindingKey) -> ClinicalContent {
    match key {
        FindingKey::TubalLigation => ClinicalContent {
            title: "Oclusión tubárica bilateral (ligadura de trompas)",
            definition: "Procedimiento quirúrgico que interrumpe ambas trompas de Falopio de forma permanente.",
            justification: "Sin continuidad tubárica el óvulo y los espermatozoides no pueden encontrarse, por lo que la concepción espontánea no es posible.",
            recommendations: &[
                "Consultar con un especialista en reproducción asistida",
                "Valorar fecundación in vitro (FIV), que no requiere trompas permeables",
                "En casos seleccionados, evaluar la recanalización tubárica quirúrgica",
            ],
        },
        FindingKey::UnilateralTubalObstruction => ClinicalContent {
            title: "Obstrucción tubárica unilateral",
            definition: "Una de las dos trompas no permite el paso del contraste en la histerosalpingografía.",
            justification: "Con una sola trompa permeable la probabilidad mensual de captación del óvulo se reduce.",
            recommendations: &[
                "Confirmar el hallazgo con el especialista (posible espasmo tubárico)",
                "Valorar inducción de ovulación del lado de la trompa permeable",
                "Considerar inseminación intrauterina si no hay embarazo en 6 meses",
            ],
        },
        FindingKey::BilateralTubalObstruction => ClinicalContent {
            title: "Obstrucción tubárica bilateral",
            definition: "Ninguna de las dos trompas muestra paso de contraste en la histerosalpingografía.",
            justification: "La obstrucción de ambas trompas impide casi por completo la fecundación natural.",
            recommendations: &[
                "Repetir o confirmar el estudio (laparoscopía o sonohisterosalpingografía)",
                "Valorar fecundación in vitro como tratamiento de elección",
            ],
        },
        FindingKey::UterineMalformation => ClinicalContent {
            title: "Malformación uterina",
            definition: "Alteración congénita de la forma de la cavidad uterina (útero septado, bicorne, unicorne, entre otros).",
            justification: "La forma anómala de la cavidad dificulta la implantación y aumenta el riesgo de aborto.",
            recommendations: &[
                "Caracterizar la malformación con ecografía 3D o resonancia magnética",
                "Evaluar la corrección histeroscópica en el caso de útero septado",
            ],
        },
        FindingKey::MildEndometriosis => ClinicalContent {
            title: "Endometriosis leve (grados I–II)",
            definition: "Presencia de tejido endometrial fuera del útero con lesiones superficiales y escasas adherencias.",
            justification: "El ambiente inflamatorio pélvico reduce la calidad ovocitaria y la receptividad endometrial.",
            recommendations: &[
                "Mantener relaciones dirigidas en la ventana fértil",
                "Valorar inseminación con estimulación si no hay embarazo en 6–12 meses",
            ],
        },
        FindingKey::SevereEndometriosis => ClinicalContent {
            title: "Endometriosis severa (grados III–IV)",
            definition: "Endometriosis con endometriomas, adherencias extensas o afectación de órganos vecinos.",
            justification: "La distorsión anatómica y el daño tubo-ovárico reducen de forma importante la fertilidad natural.",
            recommendations: &[
                "Consulta prioritaria con un especialista en reproducción",
                "Valorar fecundación in vitro",
                "Evaluar reserva ovárica antes de cualquier cirugía ovárica",
            ],
        },
        FindingKey::SubmucosalMyoma => ClinicalContent {
            title: "Mioma submucoso",
            definition: "Mioma que protruye hacia la cavidad endometrial.",
            justification: "Deforma la cavidad y altera la implantación embrionaria; es el tipo de mioma con mayor impacto reproductivo.",
            recommendations: &[
                "Valorar miomectomía histeroscópica",
                "Reevaluar la cavidad uterina tras el tratamiento",
            ],
        },
        FindingKey::IntramuralMyoma => ClinicalContent {
            title: "Mioma intramural grande",
            definition: "Mioma dentro de la pared muscular del útero de tamaño significativo (habitualmente mayor de 4 cm).",
            justification: "Los miomas intramurales grandes alteran la contractilidad y la vascularización uterina.",
            recommendations: &[
                "Evaluar tamaño y relación con la cavidad mediante ecografía o resonancia",
                "Discutir con el especialista la indicación de miomectomía",
            ],
        },
        FindingKey::SubserosalMyoma => ClinicalContent {
            title: "Mioma subseroso",
            definition: "Mioma que crece hacia la superficie externa del útero.",
            justification: "Habitualmente no altera la cavidad; solo se considera cuando su tamaño distorsiona la anatomía pélvica.",
            recommendations: &["Control ecográfico periódico"],
        },
        FindingKey::FocalAdenomyosis => ClinicalContent {
            title: "Adenomiosis focal",
            definition: "Infiltración localizada del endometrio dentro del miometrio.",
            justification: "Altera la receptividad endometrial en la zona afectada.",
            recommendations: &[
                "Seguimiento ecográfico",
                "Valorar tratamiento médico previo a técnicas de reproducción si no hay embarazo",
            ],
        },
        FindingKey::DiffuseAdenomyosis => ClinicalContent {
            title: "Adenomiosis difusa",
            definition: "Infiltración extensa del endometrio en el miometrio.",
            justification: "Se asocia a menor tasa de implantación y mayor tasa de aborto.",
            recommendations: &[
                "Consulta con un especialista en reproducción",
                "Valorar supresión con análogos de GnRH antes de una transferencia embrionaria",
            ],
        },
        FindingKey::EndometrialPolyp => ClinicalContent {
            title: "Pólipo endometrial",
            definition: "Crecimiento localizado de la mucosa endometrial.",
            justification: "Actúa como un cuerpo extraño que dificulta la implantación.",
            recommendations: &["Valorar polipectomía histeroscópica"],
        },
        FindingKey::MultiplePolyps => ClinicalContent {
            title: "Pólipos endometriales múltiples",
            definition: "Presencia de varios pólipos en la cavidad endometrial.",
            justification: "La afectación extensa de la cavidad reduce la receptividad endometrial.",
            recommendations: &[
                "Polipectomía histeroscópica",
                "Estudio anatomopatológico de las lesiones",
            ],
        },
        FindingKey::Pcos => ClinicalContent {
            title: "Síndrome de ovario poliquístico (SOP)",
            definition: "Trastorno endocrino con anovulación, hiperandrogenismo y/o ovarios de morfología poliquística.",
            justification: "La ovulación infrecuente reduce el número de oportunidades de embarazo por año.",
            recommendations: &[
                "Reducir un 5–10% del peso si hay sobrepeso",
                "Valorar inducción de la ovulación con letrozol",
                "Controlar la resistencia a la insulina",
            ],
        },
        FindingKey::LowOvarianReserve => ClinicalContent {
            title: "Reserva ovárica disminuida",
            definition: "Número de ovocitos disponibles inferior al esperado para la edad (AMH baja).",
            justification: "Una reserva baja reduce la ventana reproductiva y anticipa una menor respuesta a tratamientos.",
            recommendations: &[
                "No demorar la búsqueda de embarazo",
                "Valorar estudio de reserva con recuento de folículos antrales",
                "Considerar preservación de la fertilidad si se pospone el embarazo",
            ],
        },
        FindingKey::VeryLowOvarianReserve => ClinicalContent {
            title: "Reserva ovárica muy disminuida",
            definition: "AMH en rango muy bajo, con pocos ovocitos disponibles.",
            justification: "Reduce de forma marcada la probabilidad mensual de concepción.",
            recommendations: &[
                "Consulta prioritaria con un especialista en reproducción",
                "Valorar técnicas de reproducción asistida sin demora",
            ],
        },
        FindingKey::MaleFactor => ClinicalContent {
            title: "Factor masculino alterado",
            definition: "Alteración de la concentración, la motilidad o la morfología de los espermatozoides.",
            justification: "Menos espermatozoides funcionales reducen la probabilidad de fecundación en cada ciclo.",
            recommendations: &[
                "Repetir el espermatograma en 2–3 meses",
                "Evitar tabaco, alcohol y calor testicular",
                "Consulta con andrología",
            ],
        },
        FindingKey::Azoospermia => ClinicalContent {
            title: "Azoospermia",
            definition: "Ausencia total de espermatozoides en el eyaculado.",
            justification: "Sin espermatozoides no es posible la concepción espontánea.",
            recommendations: &[
                "Confirmar con un segundo espermatograma",
                "Estudio andrológico, hormonal y genético",
                "Valorar recuperación quirúrgica de espermatozoides o donante",
            ],
        },
        FindingKey::Underweight => ClinicalContent {
            title: "Bajo peso",
            definition: "Índice de masa corporal menor de 18.5.",
            justification: "El déficit energético altera el eje hipotálamo-hipófisis-ovario y la ovulación.",
            recommendations: &["Plan nutricional para alcanzar un IMC saludable"],
        },
        FindingKey::Overweight => ClinicalContent {
            title: "Sobrepeso",
            definition: "Índice de masa corporal entre 25 y 29.9.",
            justification: "El exceso de tejido adiposo se asocia a alteraciones ovulatorias leves.",
            recommendations: &[
                "Actividad física regular",
                "Plan de alimentación con déficit calórico moderado",
            ],
        },
        FindingKey::Obesity => ClinicalContent {
            title: "Obesidad",
            definition: "Índice de masa corporal de 30 o más.",
            justification: "La obesidad reduce la fecundabilidad y aumenta los riesgos obstétricos.",
            recommendations: &[
                "Reducir un 5–10% del peso antes de buscar embarazo",
                "Valoración por nutrición y endocrinología",
            ],
        },
        FindingKey::ShortCycle => ClinicalContent {
            title: "Ciclo menstrual corto",
            definition: "Ciclos de 24 días o menos.",
            justification: "Puede reflejar fase lútea insuficiente o reserva ovárica en descenso.",
            recommendations: &["Registrar los ciclos y confirmar la ovulación"],
        },
        FindingKey::LongCycle => ClinicalContent {
            title: "Ciclo menstrual largo",
            definition: "Ciclos de más de 35 días.",
            justification: "Los ciclos largos indican ovulaciones infrecuentes.",
            recommendations: &[
                "Estudio hormonal (FSH, LH, prolactina, TSH, andrógenos)",
                "Confirmar la ovulación con tests de LH o progesterona",
            ],
        },
        FindingKey::SubclinicalHypothyroidism => ClinicalContent {
            title: "TSH por encima del objetivo preconcepcional",
            definition: "TSH superior a 2.5 µUI/mL con función tiroidea aún compensada.",
            justification: "Se asocia a menor tasa de embarazo y mayor riesgo de aborto.",
            recommendations: &["Valorar tratamiento con levotiroxina para TSH menor de 2.5"],
        },
        FindingKey::Hypothyroidism => ClinicalContent {
            title: "Hipotiroidismo",
            definition: "TSH elevada por insuficiencia de la glándula tiroides.",
            justification: "Altera la ovulación y aumenta el riesgo de complicaciones del embarazo.",
            recommendations: &[
                "Iniciar tratamiento con levotiroxina",
                "Control de TSH en 6–8 semanas",
            ],
        },
        FindingKey::Hyperthyroidism => ClinicalContent {
            title: "Hipertiroidismo",
            definition: "TSH suprimida por exceso de hormona tiroidea.",
            justification: "Provoca alteraciones menstruales y riesgos para el embarazo.",
            recommendations: &["Valoración por endocrinología antes de buscar embarazo"],
        },
        FindingKey::ThyroidAutoimmunity => ClinicalContent {
            title: "Autoinmunidad tiroidea",
            definition: "Anticuerpos antiperoxidasa tiroidea (anti-TPO) positivos.",
            justification: "Se asocia a mayor riesgo de aborto aun con TSH normal.",
            recommendations: &["Control de TSH periódico durante la búsqueda de embarazo"],
        },
        FindingKey::Hyperprolactinemia => ClinicalContent {
            title: "Hiperprolactinemia",
            definition: "Prolactina elevada en sangre.",
            justification: "La prolactina elevada inhibe la secreción de gonadotropinas y la ovulación.",
            recommendations: &[
                "Repetir la determinación en reposo",
                "Descartar fármacos y adenoma hipofisario",
                "Valorar tratamiento con agonistas dopaminérgicos",
            ],
        },
        FindingKey::InsulinResistance => ClinicalContent {
            title: "Resistencia a la insulina",
            definition: "HOMA-IR elevado, con menor respuesta de los tejidos a la insulina.",
            justification: "La hiperinsulinemia altera la función ovárica y la calidad ovocitaria.",
            recommendations: &[
                "Cambios en el estilo de vida: dieta y ejercicio",
                "Valorar metformina con el especialista",
            ],
        },
        FindingKey::ProlongedInfertility => ClinicalContent {
            title: "Tiempo prolongado buscando embarazo",
            definition: "Más de dos años de relaciones sin protección sin lograr embarazo.",
            justification: "La probabilidad mensual de concepción espontánea disminuye con cada año sin embarazo.",
            recommendations: &[
                "Completar el estudio de fertilidad de la pareja",
                "Valorar técnicas de reproducción asistida",
            ],
        },
        FindingKey::PelvicAdhesionRisk => ClinicalContent {
            title: "Cirugía pélvica previa",
            definition: "Antecedente de una o más cirugías abdominales o pélvicas.",
            justification: "Las adherencias posquirúrgicas pueden alterar la anatomía tubo-ovárica.",
            recommendations: &["Valorar la permeabilidad tubárica si no se ha estudiado"],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_carries_text_and_recommendations() {
        let keys = [
            FindingKey::TubalLigation,
            FindingKey::BilateralTubalObstruction,
            FindingKey::SubserosalMyoma,
            FindingKey::Pcos,
            FindingKey::Azoospermia,
            FindingKey::PelvicAdhesionRisk,
        ];

        for key in keys {
            let content = clinical_content(key);
            assert!(!content.title.is_empty());
            assert!(!content.definition.is_empty());
            assert!(!content.justification.is_empty());
            assert!(!content.recommendations.is_empty(), "{key:?}");
        }
    }
}
